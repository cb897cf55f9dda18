//! Hierarchy browsing commands: regions, cities, sensors.

use anyhow::Result;
use log::info;
use wms_api::client::{ApiClient, Gateway};

/// List all regions.
pub async fn list_regions(client: &ApiClient) -> Result<()> {
    let regions = client.regions().await?;
    info!("Fetched {} regions", regions.len());

    if regions.is_empty() {
        println!("No regions found.");
        return Ok(());
    }
    for region in &regions {
        println!("{:>6}  {} ({})", region.id, region.name, region.state);
    }
    Ok(())
}

/// List the cities of one region.
pub async fn list_cities(client: &ApiClient, region_id: i64) -> Result<()> {
    let cities = client.cities(region_id).await?;
    info!("Fetched {} cities for region {}", cities.len(), region_id);

    if cities.is_empty() {
        println!("No cities found for region {}.", region_id);
        return Ok(());
    }
    for city in &cities {
        println!(
            "{:>6}  {}  ({:.4}, {:.4})",
            city.id, city.name, city.latitude, city.longitude
        );
    }
    Ok(())
}

/// List the sensors of one city via the with-sensors endpoint.
pub async fn list_sensors(client: &ApiClient, city_id: i64) -> Result<()> {
    let city = client.city_with_sensors(city_id).await?;
    info!("Fetched {} sensors for {}", city.sensors.len(), city.name);

    println!("{} (#{})", city.name, city.id);
    if city.sensors.is_empty() {
        println!("No sensors found.");
        return Ok(());
    }
    for sensor in &city.sensors {
        println!(
            "{:>6}  {}  ({:.4}, {:.4})",
            sensor.id, sensor.name, sensor.latitude, sensor.longitude
        );
    }
    Ok(())
}

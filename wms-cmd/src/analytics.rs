//! Analytics commands.

use anyhow::Result;
use log::info;
use wms_api::client::ApiClient;
use wms_charts::heatmap;

/// Print a region's heatmap feature collection as GeoJSON on stdout.
pub async fn print_heatmap(client: &ApiClient, region_id: i64) -> Result<()> {
    let collection = heatmap::load_feature_collection(client, region_id).await?;
    info!(
        "Joined {} features for region {}",
        collection["features"].as_array().map_or(0, Vec::len),
        region_id
    );
    println!("{}", serde_json::to_string_pretty(&collection)?);
    Ok(())
}

//! Weighted GeoJSON point layer for the region heatmap.
//!
//! Two fetch stages feed the layer: the per-region averages, then one
//! location lookup per listed sensor. The lookups fan out only after the
//! averages response arrives, run concurrently, and the feature collection
//! is produced only when all of them succeed.

use std::collections::HashMap;

use futures::future::join_all;
use serde_json::{json, Value};
use wms_api::client::Gateway;
use wms_api::error::Result;
use wms_api::model::{Sensor, SensorAverage};

/// Join averages with sensor coordinates into a GeoJSON feature collection.
///
/// Coordinates are GeoJSON order, `[longitude, latitude]`; the average
/// becomes the layer's `weight` property. Averages whose sensor id matches
/// none of `sensors` produce no feature.
pub fn feature_collection(averages: &[SensorAverage], sensors: &[Sensor]) -> Value {
    let by_id: HashMap<i64, &Sensor> = sensors.iter().map(|sensor| (sensor.id, sensor)).collect();
    let features: Vec<Value> = averages
        .iter()
        .filter_map(|average| {
            let sensor = by_id.get(&average.sensor_id)?;
            Some(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [sensor.longitude, sensor.latitude],
                },
                "properties": { "weight": average.average_value },
            }))
        })
        .collect();
    json!({ "type": "FeatureCollection", "features": features })
}

/// Fetch the averages for `region_id`, then every listed sensor's location,
/// and join them into the heatmap feature collection.
///
/// All-or-nothing: any failed sensor lookup fails the whole collection
/// rather than rendering a partial layer.
pub async fn load_feature_collection<G: Gateway>(gateway: &G, region_id: i64) -> Result<Value> {
    let averages = gateway.region_averages(region_id).await?;
    let lookups = averages
        .iter()
        .map(|average| gateway.sensor(average.sensor_id));
    let sensors: Vec<Sensor> = join_all(lookups)
        .await
        .into_iter()
        .collect::<Result<_>>()?;
    Ok(feature_collection(&averages, &sensors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wms_api::error::ApiError;
    use wms_api::model::{City, CityWithSensors, Region, SensorPrediction, SensorRecord};

    fn average(sensor_id: i64, average_value: f64) -> SensorAverage {
        SensorAverage {
            sensor_id,
            average_value,
        }
    }

    fn sensor(id: i64, latitude: f64, longitude: f64) -> Sensor {
        Sensor {
            id,
            name: format!("Bin {}", id),
            latitude,
            longitude,
            city_id: 4,
        }
    }

    /// Gateway fake covering just the two heatmap stages, with a call log
    /// for ordering assertions.
    #[derive(Default)]
    struct StagedGateway {
        averages: Vec<SensorAverage>,
        sensors: Vec<Sensor>,
        calls: RefCell<Vec<String>>,
    }

    impl Gateway for StagedGateway {
        async fn regions(&self) -> Result<Vec<Region>> {
            unimplemented!("not used by the heatmap")
        }

        async fn cities(&self, _region_id: i64) -> Result<Vec<City>> {
            unimplemented!("not used by the heatmap")
        }

        async fn city_with_sensors(&self, _city_id: i64) -> Result<CityWithSensors> {
            unimplemented!("not used by the heatmap")
        }

        async fn sensor(&self, sensor_id: i64) -> Result<Sensor> {
            self.calls.borrow_mut().push(format!("sensor:{}", sensor_id));
            self.sensors
                .iter()
                .find(|sensor| sensor.id == sensor_id)
                .cloned()
                .ok_or_else(|| ApiError::Status {
                    status: reqwest::StatusCode::NOT_FOUND,
                    url: format!("fake:sensor:{}", sensor_id),
                })
        }

        async fn latest_records(&self, _sensor_id: i64, _limit: usize) -> Result<Vec<SensorRecord>> {
            unimplemented!("not used by the heatmap")
        }

        async fn predict(&self, _sensor_id: i64) -> Result<SensorPrediction> {
            unimplemented!("not used by the heatmap")
        }

        async fn region_averages(&self, region_id: i64) -> Result<Vec<SensorAverage>> {
            self.calls
                .borrow_mut()
                .push(format!("region_averages:{}", region_id));
            Ok(self.averages.clone())
        }
    }

    #[test]
    fn joins_weight_and_location_by_sensor_id() {
        let collection = feature_collection(&[average(1, 7.0)], &[sensor(1, 3.1, 101.6)]);

        let features = collection["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(
            features[0]["geometry"]["coordinates"],
            json!([101.6, 3.1])
        );
        assert_eq!(features[0]["properties"]["weight"], json!(7.0));
    }

    #[test]
    fn unresolvable_averages_produce_no_feature() {
        let collection = feature_collection(
            &[average(1, 7.0), average(2, 3.0)],
            &[sensor(2, 4.6, 101.07)],
        );
        let features = collection["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["properties"]["weight"], json!(3.0));
    }

    #[tokio::test]
    async fn lookups_fan_out_only_after_averages_arrive() {
        let gateway = StagedGateway {
            averages: vec![average(1, 7.0), average(2, 3.0)],
            sensors: vec![sensor(1, 3.1, 101.6), sensor(2, 4.6, 101.07)],
            ..StagedGateway::default()
        };

        let collection = load_feature_collection(&gateway, 1).await.unwrap();
        assert_eq!(collection["features"].as_array().unwrap().len(), 2);

        let calls = gateway.calls.borrow();
        assert_eq!(calls[0], "region_averages:1");
        assert_eq!(calls.len(), 3);
    }

    #[tokio::test]
    async fn one_failed_lookup_fails_the_collection() {
        let gateway = StagedGateway {
            averages: vec![average(1, 7.0), average(9, 5.0)],
            // Sensor 9 is unknown, so its lookup 404s.
            sensors: vec![sensor(1, 3.1, 101.6)],
            ..StagedGateway::default()
        };

        let result = load_feature_collection(&gateway, 1).await;
        assert!(result.is_err());
    }
}

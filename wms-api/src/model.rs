//! Data model for the waste management API.
//!
//! All types derive `Serialize` so they can be handed to D3.js and Mapbox GL
//! as JSON from the Dioxus WASM frontend, and `Deserialize` for the REST
//! wire format. Entities are created by the remote system; the client only
//! ever reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A top-level administrative region containing cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub name: String,
    /// State or federal territory the region belongs to.
    pub state: String,
    /// Emblem image shown next to the region name in the switcher.
    pub emblem_url: Option<String>,
}

/// A city within a region, grouping sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region_id: i64,
}

/// Response shape of the `with-sensors` endpoint: a city together with its
/// full sensor list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWithSensors {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub region_id: i64,
    pub sensors: Vec<Sensor>,
}

/// A trash-level monitoring device with a fixed location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city_id: i64,
}

/// One reading in a sensor's history, immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub id: i64,
    pub sensor_id: i64,
    pub timestamp: DateTime<Utc>,
    /// Fill percentage, 0-100. Render through [`clamp_level`].
    pub trash_level: f64,
    /// Snapshot image URL, if the sensor captured one.
    pub image: Option<String>,
}

/// Computed time-to-full estimate for one sensor. Never cached client-side;
/// recomputed by the backend on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPrediction {
    pub sensor_id: i64,
    pub predicted_timestamp: DateTime<Utc>,
    pub hours_until_full: f64,
    /// Projected fill percentage, 0-100.
    pub predicted_level: f64,
}

/// One row of the per-region analytics endpoint: a sensor's average fill
/// level over the aggregation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorAverage {
    pub sensor_id: i64,
    pub average_value: f64,
}

/// Clamp a fill level to the displayable 0-100 range.
///
/// The API contract says levels are percentages, but readings from
/// miscalibrated sensors do drift outside the range.
pub fn clamp_level(level: f64) -> f64 {
    level.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_decodes_with_null_emblem() {
        let json = r#"{"id": 1, "name": "Selangor", "state": "Selangor", "emblem_url": null}"#;
        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.id, 1);
        assert_eq!(region.name, "Selangor");
        assert!(region.emblem_url.is_none());
    }

    #[test]
    fn city_with_sensors_decodes_nested_list() {
        let json = r#"{
            "id": 7, "name": "Ipoh", "latitude": 4.6, "longitude": 101.07, "region_id": 2,
            "sensors": [
                {"id": 31, "name": "Bin 31", "latitude": 4.61, "longitude": 101.08, "city_id": 7}
            ]
        }"#;
        let city: CityWithSensors = serde_json::from_str(json).unwrap();
        assert_eq!(city.sensors.len(), 1);
        assert_eq!(city.sensors[0].city_id, city.id);
    }

    #[test]
    fn record_timestamp_parses_rfc3339() {
        let json = r#"{
            "id": 100, "sensor_id": 31,
            "timestamp": "2025-03-14T09:26:53Z",
            "trash_level": 62.0, "image": "https://example.test/shot.jpg"
        }"#;
        let record: SensorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.timestamp.to_rfc3339(), "2025-03-14T09:26:53+00:00");
        assert_eq!(record.image.as_deref(), Some("https://example.test/shot.jpg"));
    }

    #[test]
    fn clamp_level_bounds() {
        assert_eq!(clamp_level(-3.0), 0.0);
        assert_eq!(clamp_level(47.5), 47.5);
        assert_eq!(clamp_level(118.0), 100.0);
    }
}

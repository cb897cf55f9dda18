//! Canned gateway and model builders shared by the store tests.

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use wms_api::client::Gateway;
use wms_api::error::{ApiError, Result};
use wms_api::model::{
    City, CityWithSensors, Region, Sensor, SensorAverage, SensorPrediction, SensorRecord,
};

pub fn region(id: i64, name: &str) -> Region {
    Region {
        id,
        name: name.to_string(),
        state: name.to_string(),
        emblem_url: None,
    }
}

pub fn city(id: i64, name: &str, region_id: i64) -> City {
    City {
        id,
        name: name.to_string(),
        latitude: 3.1,
        longitude: 101.6,
        region_id,
    }
}

pub fn sensor(id: i64, name: &str, city_id: i64) -> Sensor {
    Sensor {
        id,
        name: name.to_string(),
        latitude: 3.1,
        longitude: 101.6,
        city_id,
    }
}

pub fn record(id: i64, sensor_id: i64, trash_level: f64) -> SensorRecord {
    SensorRecord {
        id,
        sensor_id,
        timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap(),
        trash_level,
        image: None,
    }
}

pub fn prediction(sensor_id: i64) -> SensorPrediction {
    SensorPrediction {
        sensor_id,
        predicted_timestamp: Utc.with_ymd_and_hms(2025, 3, 15, 18, 0, 0).unwrap(),
        hours_until_full: 33.0,
        predicted_level: 97.0,
    }
}

fn server_error(name: &str) -> ApiError {
    ApiError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        url: format!("fake:{}", name),
    }
}

fn not_found(name: &str) -> ApiError {
    ApiError::Status {
        status: reqwest::StatusCode::NOT_FOUND,
        url: format!("fake:{}", name),
    }
}

/// In-memory [`Gateway`] with canned data, per-endpoint failure switches,
/// and a call log for at-most-once assertions.
#[derive(Default)]
pub struct FakeGateway {
    pub regions: Vec<Region>,
    pub cities: Vec<City>,
    pub sensors_by_city: HashMap<i64, Vec<Sensor>>,
    pub sensors: Vec<Sensor>,
    pub records: Vec<SensorRecord>,
    pub prediction: Option<SensorPrediction>,
    pub averages: Vec<SensorAverage>,
    /// Endpoint names (the part before `:` in the call log) forced to fail
    /// with a 500.
    pub fail: Vec<&'static str>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn hit(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(name.to_string());
        let endpoint = name.split(':').next().unwrap_or(name);
        if self.fail.contains(&endpoint) {
            Err(server_error(name))
        } else {
            Ok(())
        }
    }
}

impl Gateway for FakeGateway {
    async fn regions(&self) -> Result<Vec<Region>> {
        self.hit("regions")?;
        Ok(self.regions.clone())
    }

    async fn cities(&self, region_id: i64) -> Result<Vec<City>> {
        self.hit(&format!("cities:{}", region_id))?;
        Ok(self
            .cities
            .iter()
            .filter(|city| city.region_id == region_id)
            .cloned()
            .collect())
    }

    async fn city_with_sensors(&self, city_id: i64) -> Result<CityWithSensors> {
        let name = format!("city_with_sensors:{}", city_id);
        self.hit(&name)?;
        let sensors = self
            .sensors_by_city
            .get(&city_id)
            .cloned()
            .ok_or_else(|| not_found(&name))?;
        Ok(CityWithSensors {
            id: city_id,
            name: format!("City {}", city_id),
            latitude: 3.1,
            longitude: 101.6,
            region_id: 1,
            sensors,
        })
    }

    async fn sensor(&self, sensor_id: i64) -> Result<Sensor> {
        let name = format!("sensor:{}", sensor_id);
        self.hit(&name)?;
        self.sensors
            .iter()
            .find(|sensor| sensor.id == sensor_id)
            .cloned()
            .ok_or_else(|| not_found(&name))
    }

    async fn latest_records(&self, sensor_id: i64, limit: usize) -> Result<Vec<SensorRecord>> {
        self.hit(&format!("latest_records:{}", sensor_id))?;
        Ok(self
            .records
            .iter()
            .filter(|record| record.sensor_id == sensor_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn predict(&self, sensor_id: i64) -> Result<SensorPrediction> {
        let name = format!("predict:{}", sensor_id);
        self.hit(&name)?;
        self.prediction.clone().ok_or_else(|| not_found(&name))
    }

    async fn region_averages(&self, region_id: i64) -> Result<Vec<SensorAverage>> {
        self.hit(&format!("region_averages:{}", region_id))?;
        Ok(self.averages.clone())
    }
}

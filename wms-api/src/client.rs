//! REST gateway for the waste management API.
//!
//! Every endpoint is a plain GET returning JSON. The status is checked
//! before the body is decoded so non-2xx responses and malformed bodies
//! surface as distinct [`ApiError`] variants.

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::model::{
    City, CityWithSensors, Region, Sensor, SensorAverage, SensorPrediction, SensorRecord,
};
use log::debug;
use serde::de::DeserializeOwned;

/// Read-only access to the remote waste management API.
///
/// The dashboard stores and the CLI both reach the network through this
/// trait, so tests can inject a canned in-memory implementation instead.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// All regions, in the server's display order.
    async fn regions(&self) -> Result<Vec<Region>>;

    /// Cities belonging to one region.
    async fn cities(&self, region_id: i64) -> Result<Vec<City>>;

    /// A city together with its complete sensor list.
    async fn city_with_sensors(&self, city_id: i64) -> Result<CityWithSensors>;

    /// Metadata (name, coordinates) for one sensor.
    async fn sensor(&self, sensor_id: i64) -> Result<Sensor>;

    /// The most recent readings for one sensor, newest first.
    async fn latest_records(&self, sensor_id: i64, limit: usize) -> Result<Vec<SensorRecord>>;

    /// An on-demand fullness prediction for one sensor.
    async fn predict(&self, sensor_id: i64) -> Result<SensorPrediction>;

    /// Average fill level per sensor across one region.
    async fn region_averages(&self, region_id: i64) -> Result<Vec<SensorAverage>>;
}

/// reqwest-backed [`Gateway`] implementation.
///
/// Cloning is cheap: the underlying reqwest client is a shared handle. On
/// wasm32 the same code runs over the browser's fetch API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, url });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Gateway for ApiClient {
    async fn regions(&self) -> Result<Vec<Region>> {
        self.get_json("/region/").await
    }

    async fn cities(&self, region_id: i64) -> Result<Vec<City>> {
        self.get_json(&format!("/region/{}/cities", region_id)).await
    }

    async fn city_with_sensors(&self, city_id: i64) -> Result<CityWithSensors> {
        self.get_json(&format!("/region/city/{}/with-sensors", city_id))
            .await
    }

    async fn sensor(&self, sensor_id: i64) -> Result<Sensor> {
        self.get_json(&format!("/sensor/{}", sensor_id)).await
    }

    async fn latest_records(&self, sensor_id: i64, limit: usize) -> Result<Vec<SensorRecord>> {
        self.get_json(&format!(
            "/sensor/{}/latest-records?limit={}",
            sensor_id, limit
        ))
        .await
    }

    async fn predict(&self, sensor_id: i64) -> Result<SensorPrediction> {
        self.get_json(&format!("/predict/{}", sensor_id)).await
    }

    async fn region_averages(&self, region_id: i64) -> Result<Vec<SensorAverage>> {
        self.get_json(&format!("/analytics/average/{}", region_id))
            .await
    }
}

//! Per-sensor detail view state: metadata, recent history, and the
//! on-demand fullness prediction.

use futures::join;
use log::{error, warn};
use wms_api::client::Gateway;
use wms_api::error::ApiError;
use wms_api::model::{Sensor, SensorPrediction, SensorRecord};

/// How many readings the history table shows.
pub const DEFAULT_RECORD_LIMIT: usize = 10;

/// Lifecycle of the prediction request behind the "predict" button.
///
/// `Idle → Fetching → Settled → Idle`: the trigger is disabled while a
/// request is in flight, the settled payload (success or error message) is
/// shown in a single modal, and dismissing the modal re-enables the
/// trigger. There is no automatic retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PredictionState {
    #[default]
    Idle,
    Fetching,
    Settled(Result<SensorPrediction, String>),
}

/// View state for one sensor's detail page.
///
/// Metadata and recent records are fetched as isolated operations: either
/// may fail without blocking or clearing the other's result, and they may
/// settle in either order. Completions are tagged with the sensor id they
/// were fetched for, and this store drops completions for any other sensor.
#[derive(Debug)]
pub struct SensorDetail {
    sensor_id: i64,
    sensor: Option<Sensor>,
    sensor_error: Option<String>,
    records: Vec<SensorRecord>,
    records_loading: bool,
    records_error: Option<String>,
    prediction: PredictionState,
}

impl SensorDetail {
    pub fn new(sensor_id: i64) -> Self {
        Self {
            sensor_id,
            sensor: None,
            sensor_error: None,
            records: Vec::new(),
            records_loading: true,
            records_error: None,
            prediction: PredictionState::Idle,
        }
    }

    pub fn sensor_id(&self) -> i64 {
        self.sensor_id
    }

    /// Sensor metadata once its fetch has succeeded.
    pub fn sensor(&self) -> Option<&Sensor> {
        self.sensor.as_ref()
    }

    pub fn sensor_error(&self) -> Option<&str> {
        self.sensor_error.as_deref()
    }

    /// The most recent readings, newest first.
    pub fn records(&self) -> &[SensorRecord] {
        &self.records
    }

    pub fn is_loading_records(&self) -> bool {
        self.records_loading
    }

    pub fn records_error(&self) -> Option<&str> {
        self.records_error.as_deref()
    }

    pub fn prediction(&self) -> &PredictionState {
        &self.prediction
    }

    /// Whether the predict trigger is currently enabled.
    pub fn can_request_prediction(&self) -> bool {
        self.prediction == PredictionState::Idle
    }

    /// Apply a metadata result fetched for `sensor_id`.
    pub fn finish_sensor(&mut self, sensor_id: i64, result: Result<Sensor, ApiError>) {
        if sensor_id != self.sensor_id {
            warn!(
                "Discarding metadata for sensor {}: view moved to sensor {}",
                sensor_id, self.sensor_id
            );
            return;
        }
        match result {
            Ok(sensor) => self.sensor = Some(sensor),
            Err(err) => {
                error!("Failed to fetch sensor {}: {}", sensor_id, err);
                self.sensor_error = Some("Failed to load sensor details".to_string());
            }
        }
    }

    /// Apply a records result fetched for `sensor_id`.
    pub fn finish_records(&mut self, sensor_id: i64, result: Result<Vec<SensorRecord>, ApiError>) {
        if sensor_id != self.sensor_id {
            warn!(
                "Discarding records for sensor {}: view moved to sensor {}",
                sensor_id, self.sensor_id
            );
            return;
        }
        self.records_loading = false;
        match result {
            Ok(records) => self.records = records,
            Err(err) => {
                error!("Failed to fetch records for sensor {}: {}", sensor_id, err);
                self.records_error = Some("Failed to load sensor records".to_string());
            }
        }
    }

    /// Fetch metadata and recent records concurrently through `gateway`.
    ///
    /// The two calls are issued together and applied independently, so one
    /// failing leaves the other's result intact.
    pub async fn load<G: Gateway>(&mut self, gateway: &G, limit: usize) {
        let sensor_id = self.sensor_id;
        let (sensor, records) = join!(
            gateway.sensor(sensor_id),
            gateway.latest_records(sensor_id, limit)
        );
        self.finish_sensor(sensor_id, sensor);
        self.finish_records(sensor_id, records);
    }

    /// Arm the prediction fetch.
    ///
    /// Returns `false` while a request is in flight or its modal is still
    /// up; only one prediction lifecycle may be outstanding per view.
    #[must_use]
    pub fn request_prediction(&mut self) -> bool {
        if self.prediction != PredictionState::Idle {
            return false;
        }
        self.prediction = PredictionState::Fetching;
        true
    }

    /// Settle the outstanding prediction with a payload or an error
    /// message. Results for another sensor, or with no request outstanding,
    /// are dropped.
    pub fn finish_prediction(&mut self, sensor_id: i64, result: Result<SensorPrediction, ApiError>) {
        if sensor_id != self.sensor_id || self.prediction != PredictionState::Fetching {
            warn!("Discarding stale prediction for sensor {}", sensor_id);
            return;
        }
        self.prediction = PredictionState::Settled(result.map_err(|err| {
            error!("Failed to fetch prediction for sensor {}: {}", sensor_id, err);
            "Failed to fetch prediction".to_string()
        }));
    }

    /// Close the prediction modal, re-enabling the trigger.
    pub fn dismiss_prediction(&mut self) {
        if matches!(self.prediction, PredictionState::Settled(_)) {
            self.prediction = PredictionState::Idle;
        }
    }

    /// Run one full prediction lifecycle through `gateway`, unless one is
    /// already outstanding.
    pub async fn predict<G: Gateway>(&mut self, gateway: &G) {
        if !self.request_prediction() {
            return;
        }
        let sensor_id = self.sensor_id;
        let result = gateway.predict(sensor_id).await;
        self.finish_prediction(sensor_id, result);
    }
}

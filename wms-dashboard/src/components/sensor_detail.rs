//! Per-sensor detail view: recent readings and the on-demand prediction.

use crate::components::{ErrorDisplay, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use wms_api::client::{ApiClient, Gateway};
use wms_api::model::{clamp_level, SensorPrediction, SensorRecord};
use wms_state::detail::PredictionState;

#[component]
pub fn SensorDetailView() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<ApiClient>();

    let view = state.detail.read();
    let Some(detail) = view.as_ref() else {
        return rsx! {};
    };
    let sensor_id = detail.sensor_id();
    let title = detail
        .sensor()
        .map(|sensor| format!("Sensor: {}", sensor.name))
        .unwrap_or_else(|| format!("Sensor #{}", sensor_id));
    let location = detail
        .sensor()
        .map(|sensor| format!("{:.4}, {:.4}", sensor.latitude, sensor.longitude));
    let sensor_error = detail.sensor_error().map(str::to_string);
    let records = detail.records().to_vec();
    let records_loading = detail.is_loading_records();
    let records_error = detail.records_error().map(str::to_string);
    let prediction = detail.prediction().clone();
    let can_predict = detail.can_request_prediction();
    drop(view);

    let on_back = move |_| {
        let mut state = state;
        state.detail.set(None);
    };

    // Arm the store first; a second click while one lifecycle is
    // outstanding returns false and dispatches nothing.
    let on_predict = move |_| {
        let mut detail_signal = state.detail;
        let armed = detail_signal
            .write()
            .as_mut()
            .map(|detail| detail.request_prediction())
            .unwrap_or(false);
        if !armed {
            return;
        }
        let client = client.clone();
        spawn(async move {
            let result = client.predict(sensor_id).await;
            if let Some(detail) = detail_signal.write().as_mut() {
                detail.finish_prediction(sensor_id, result);
            }
        });
    };

    let predict_label = if matches!(prediction, PredictionState::Fetching) {
        "Predicting..."
    } else {
        "Predict fullness"
    };

    rsx! {
        div {
            button {
                style: "border: none; background: none; color: #3b82f6; cursor: pointer; font-size: 13px; padding: 0; margin-bottom: 12px;",
                onclick: on_back,
                "← Back to overview"
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                h2 {
                    style: "margin: 0; font-size: 18px;",
                    "{title}"
                }
                button {
                    style: "padding: 6px 12px; font-size: 13px; border: 1px solid #cbd2d9; border-radius: 6px; background: #ffffff; cursor: pointer;",
                    disabled: !can_predict,
                    onclick: on_predict,
                    "{predict_label}"
                }
            }
            if let Some(location) = location {
                p {
                    style: "margin: 0 0 12px 0; font-size: 12px; color: #7b8794;",
                    "Location: {location}"
                }
            }
            if let Some(message) = sensor_error {
                ErrorDisplay { message }
            }

            h3 {
                style: "margin: 12px 0 8px 0; font-size: 15px;",
                "Latest Records"
            }
            if records_loading {
                LoadingSpinner {}
            } else if let Some(message) = records_error {
                ErrorDisplay { message }
            } else if records.is_empty() {
                div {
                    style: "padding: 14px; background: #f1f3f5; border-radius: 6px; color: #7b8794; font-size: 13px;",
                    "No records found for this sensor."
                }
            } else {
                RecordsTable { records }
            }

            if let PredictionState::Settled(outcome) = prediction {
                PredictionDialog { outcome }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RecordsTableProps {
    records: Vec<SensorRecord>,
}

#[component]
fn RecordsTable(props: RecordsTableProps) -> Element {
    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 13px; border: 1px solid #e4e7eb; border-radius: 6px;",
            thead {
                tr {
                    style: "text-align: left; border-bottom: 1px solid #e4e7eb; color: #7b8794;",
                    th { style: "padding: 8px;", "ID" }
                    th { style: "padding: 8px;", "Timestamp" }
                    th { style: "padding: 8px; width: 40%;", "Trash Level" }
                    th { style: "padding: 8px;", "Image" }
                }
            }
            tbody {
                for record in props.records.iter() {
                    RecordRow { record: record.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RecordRowProps {
    record: SensorRecord,
}

#[component]
fn RecordRow(props: RecordRowProps) -> Element {
    let record = &props.record;
    let timestamp = record.timestamp.format("%b %e, %Y %H:%M:%S UTC").to_string();
    let level = clamp_level(record.trash_level);
    let level_label = format!("{:.0}%", level);

    rsx! {
        tr {
            style: "border-bottom: 1px solid #f1f3f5;",
            td { style: "padding: 8px;", "{record.id}" }
            td { style: "padding: 8px;", "{timestamp}" }
            td {
                style: "padding: 8px;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    div {
                        style: "flex: 1; background: #e4e7eb; border-radius: 9999px; height: 8px;",
                        div {
                            style: "background: #10b981; height: 8px; border-radius: 9999px; width: {level}%;",
                        }
                    }
                    span { "{level_label}" }
                }
            }
            td {
                style: "padding: 8px;",
                if let Some(url) = record.image.clone() {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: #3b82f6;",
                        "View"
                    }
                } else {
                    span { style: "color: #7b8794;", "None" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PredictionDialogProps {
    outcome: Result<SensorPrediction, String>,
}

/// Modal shown once the prediction settles, success or failure. Dismissing
/// it re-enables the predict trigger.
#[component]
fn PredictionDialog(props: PredictionDialogProps) -> Element {
    let state = use_context::<AppState>();

    let on_close = move |_| {
        let mut detail_signal = state.detail;
        let mut detail_guard = detail_signal.write();
        if let Some(detail) = detail_guard.as_mut() {
            detail.dismiss_prediction();
        }
    };

    let body = match &props.outcome {
        Ok(prediction) => {
            let hours = format!("{:.1}", prediction.hours_until_full);
            let level = format!("{:.0}%", clamp_level(prediction.predicted_level));
            let expected = prediction
                .predicted_timestamp
                .format("%b %e, %Y %H:%M UTC")
                .to_string();
            rsx! {
                h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Fullness Prediction" }
                p { style: "margin: 4px 0; font-size: 13px;", "Estimated full in {hours} hours" }
                p { style: "margin: 4px 0; font-size: 13px;", "Projected level: {level}" }
                p { style: "margin: 4px 0; font-size: 13px; color: #7b8794;", "Expected at {expected}" }
            }
        }
        Err(message) => rsx! {
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Prediction Failed" }
            p { style: "margin: 4px 0; font-size: 13px; color: #b71c1c;", "{message}" }
        },
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); display: flex; align-items: center; justify-content: center; z-index: 10;",
            div {
                style: "background: #ffffff; border-radius: 10px; padding: 20px; min-width: 320px; max-width: 420px;",
                {body}
                button {
                    style: "margin-top: 12px; padding: 6px 12px; font-size: 13px; border: 1px solid #cbd2d9; border-radius: 6px; background: #ffffff; cursor: pointer;",
                    onclick: on_close,
                    "Close"
                }
            }
        }
    }
}

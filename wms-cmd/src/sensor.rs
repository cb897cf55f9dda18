//! Sensor history and prediction commands.
//!
//! Both commands drive the same detail store the dashboard uses, so the CLI
//! inherits its semantics: metadata and records fetch independently, and a
//! metadata failure downgrades to a warning instead of hiding the history.

use anyhow::Result;
use log::info;
use wms_api::client::ApiClient;
use wms_api::model::{clamp_level, SensorRecord};
use wms_state::detail::{PredictionState, SensorDetail};

/// Width of the fill-level bar in the records table.
const BAR_WIDTH: usize = 12;

/// Print a sensor's metadata and most recent readings.
pub async fn show_records(client: &ApiClient, sensor_id: i64, limit: usize) -> Result<()> {
    info!("Fetching sensor {} and its latest {} records", sensor_id, limit);
    let mut detail = SensorDetail::new(sensor_id);
    detail.load(client, limit).await;

    match detail.sensor() {
        Some(sensor) => println!(
            "Sensor: {} (#{})  at {:.4}, {:.4}",
            sensor.name, sensor.id, sensor.latitude, sensor.longitude
        ),
        None => {
            println!("Sensor #{}", sensor_id);
            if let Some(message) = detail.sensor_error() {
                eprintln!("warning: {}", message);
            }
        }
    }

    if let Some(message) = detail.records_error() {
        anyhow::bail!("{}", message);
    }
    if detail.records().is_empty() {
        println!("No records found.");
        return Ok(());
    }
    print!("{}", records_table(detail.records()));
    Ok(())
}

/// Request and print a fullness prediction.
pub async fn show_prediction(client: &ApiClient, sensor_id: i64) -> Result<()> {
    info!("Requesting prediction for sensor {}", sensor_id);
    let mut detail = SensorDetail::new(sensor_id);
    detail.predict(client).await;

    match detail.prediction() {
        PredictionState::Settled(Ok(prediction)) => {
            println!("Estimated full in {:.1} hours", prediction.hours_until_full);
            println!(
                "Projected level: {:.0}%",
                clamp_level(prediction.predicted_level)
            );
            println!(
                "Expected at {}",
                prediction.predicted_timestamp.format("%Y-%m-%d %H:%M UTC")
            );
            Ok(())
        }
        PredictionState::Settled(Err(message)) => anyhow::bail!("{}", message),
        _ => anyhow::bail!("prediction request did not settle"),
    }
}

/// Format readings as an aligned table, newest first.
fn records_table(records: &[SensorRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>8}  {:<19}  {:>6}  {:<width$}  {}\n",
        "ID",
        "TIMESTAMP (UTC)",
        "LEVEL",
        "",
        "IMAGE",
        width = BAR_WIDTH
    ));
    for record in records {
        let level = clamp_level(record.trash_level);
        let timestamp = record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        out.push_str(&format!(
            "{:>8}  {:<19}  {:>5.0}%  {:<width$}  {}\n",
            record.id,
            timestamp,
            level,
            level_bar(level),
            record.image.as_deref().unwrap_or("-"),
            width = BAR_WIDTH
        ));
    }
    out
}

/// Render a 0-100 level as a fixed-width bar.
fn level_bar(level: f64) -> String {
    let filled = ((clamp_level(level) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for position in 0..BAR_WIDTH {
        bar.push(if position < filled { '#' } else { '.' });
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, trash_level: f64, image: Option<&str>) -> SensorRecord {
        SensorRecord {
            id,
            sensor_id: 31,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
            trash_level,
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn level_bar_is_proportional_and_clamped() {
        assert_eq!(level_bar(0.0), "............");
        assert_eq!(level_bar(50.0), "######......");
        assert_eq!(level_bar(100.0), "############");
        assert_eq!(level_bar(140.0), "############");
    }

    #[test]
    fn records_table_aligns_and_clamps() {
        let table = records_table(&[
            record(2, 80.0, None),
            record(1, 117.0, Some("https://example.test/shot.jpg")),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("2025-03-14 09:26:53"));
        assert!(lines[1].contains("80%"));
        assert!(lines[1].ends_with("-"));
        // Out-of-range reading renders as a full bar at 100%.
        assert!(lines[2].contains("100%"));
        assert!(lines[2].contains("############"));
        assert!(lines[2].ends_with("https://example.test/shot.jpg"));
    }
}

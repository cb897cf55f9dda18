//! Fleet metrics time series for the line chart widget.
//!
//! The chart selects one metric and one time window at a time. Data comes
//! in through a single [`MetricsSource`] contract; [`SampleMetrics`] is the
//! built-in provider, and a gateway-backed provider can slot in behind the
//! same trait without touching the widget.

use serde::Serialize;

/// Time window selectable in the metrics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    Week,
    Month,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Day, TimeWindow::Week, TimeWindow::Month];

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Day => "Day",
            TimeWindow::Week => "Week",
            TimeWindow::Month => "Month",
        }
    }
}

/// Metric selectable in the metrics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Fuel,
    Distance,
    Emission,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Fuel, Metric::Distance, Metric::Emission];

    /// Axis label including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Fuel => "Fuel Consumption (L)",
            Metric::Distance => "Distance Traveled (km)",
            Metric::Emission => "Emission Rate (kg CO2)",
        }
    }

    /// Line color in the chart.
    pub fn color(self) -> &'static str {
        match self {
            Metric::Fuel => "#f59e0b",
            Metric::Distance => "#3b82f6",
            Metric::Emission => "#10b981",
        }
    }
}

/// One sample across all metrics at a point in the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPoint {
    /// Axis tick label ("08:00", "Tue", "Week 3").
    pub time: &'static str,
    pub fuel: f64,
    pub distance: f64,
    pub emission: f64,
}

impl MetricPoint {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Fuel => self.fuel,
            Metric::Distance => self.distance,
            Metric::Emission => self.emission,
        }
    }
}

/// Source of metrics series data, one window at a time.
pub trait MetricsSource {
    fn series(&self, window: TimeWindow) -> Vec<MetricPoint>;
}

macro_rules! point {
    ($time:literal, $fuel:literal, $distance:literal, $emission:literal) => {
        MetricPoint {
            time: $time,
            fuel: $fuel,
            distance: $distance,
            emission: $emission,
        }
    };
}

const DAY_DATA: [MetricPoint; 6] = [
    point!("00:00", 12.0, 15.0, 8.0),
    point!("04:00", 19.0, 25.0, 12.0),
    point!("08:00", 30.0, 40.0, 20.0),
    point!("12:00", 25.0, 35.0, 18.0),
    point!("16:00", 40.0, 60.0, 25.0),
    point!("20:00", 35.0, 50.0, 22.0),
];

const WEEK_DATA: [MetricPoint; 7] = [
    point!("Mon", 120.0, 150.0, 80.0),
    point!("Tue", 190.0, 250.0, 120.0),
    point!("Wed", 300.0, 400.0, 200.0),
    point!("Thu", 250.0, 350.0, 180.0),
    point!("Fri", 400.0, 600.0, 250.0),
    point!("Sat", 350.0, 500.0, 220.0),
    point!("Sun", 200.0, 300.0, 150.0),
];

const MONTH_DATA: [MetricPoint; 4] = [
    point!("Week 1", 520.0, 750.0, 380.0),
    point!("Week 2", 690.0, 950.0, 520.0),
    point!("Week 3", 800.0, 1200.0, 600.0),
    point!("Week 4", 750.0, 1100.0, 580.0),
];

/// Built-in sample provider, pending per-metric history on the analytics
/// API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleMetrics;

impl MetricsSource for SampleMetrics {
    fn series(&self, window: TimeWindow) -> Vec<MetricPoint> {
        match window {
            TimeWindow::Day => DAY_DATA.to_vec(),
            TimeWindow::Week => WEEK_DATA.to_vec(),
            TimeWindow::Month => MONTH_DATA.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_have_their_own_resolution() {
        let source = SampleMetrics;
        assert_eq!(source.series(TimeWindow::Day).len(), 6);
        assert_eq!(source.series(TimeWindow::Week).len(), 7);
        assert_eq!(source.series(TimeWindow::Month).len(), 4);
    }

    #[test]
    fn points_project_by_metric() {
        let series = SampleMetrics.series(TimeWindow::Week);
        let friday = &series[4];
        assert_eq!(friday.time, "Fri");
        assert_eq!(friday.value(Metric::Fuel), 400.0);
        assert_eq!(friday.value(Metric::Distance), 600.0);
        assert_eq!(friday.value(Metric::Emission), 250.0);
    }

    #[test]
    fn every_metric_has_a_distinct_color() {
        let colors: Vec<_> = Metric::ALL.iter().map(|m| m.color()).collect();
        assert_eq!(colors.len(), 3);
        assert!(colors.windows(2).all(|pair| pair[0] != pair[1]));
    }
}

//! Fleet metrics line chart with metric and time-window selection.
//!
//! Selection state is local and non-persisted; changing it only re-renders
//! the chart from the metrics source.

use crate::components::{ChartContainer, CARD_STYLE, CARD_TITLE_STYLE};
use crate::js_bridge;
use dioxus::prelude::*;
use wms_charts::metrics::{Metric, MetricsSource, SampleMetrics, TimeWindow};

const CHART_ID: &str = "metrics-chart";

#[component]
pub fn MetricsChart() -> Element {
    let mut metric = use_signal(|| Metric::Fuel);
    let mut window = use_signal(|| TimeWindow::Day);

    use_effect(move || {
        let selected_metric = metric();
        let selected_window = window();
        let series = SampleMetrics.series(selected_window);
        let points: Vec<serde_json::Value> = series
            .iter()
            .map(|point| {
                serde_json::json!({
                    "time": point.time,
                    "value": point.value(selected_metric),
                })
            })
            .collect();
        let data_json = serde_json::to_string(&points).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "label": selected_metric.label(),
            "color": selected_metric.color(),
            "height": 120,
        }))
        .unwrap_or_default();
        js_bridge::destroy_chart(CHART_ID);
        js_bridge::render_line_chart(CHART_ID, &data_json, &config_json);
    });

    let window_tabs: Vec<(TimeWindow, &str, bool)> = TimeWindow::ALL
        .iter()
        .map(|w| (*w, w.label(), *w == window()))
        .collect();
    let metric_options: Vec<(Metric, &str, bool)> = Metric::ALL
        .iter()
        .map(|m| (*m, m.label(), *m == metric()))
        .collect();

    rsx! {
        div {
            style: CARD_STYLE,
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                h4 { style: CARD_TITLE_STYLE, "Metrics" }
                div {
                    style: "display: flex; gap: 2px;",
                    for (value, label, selected) in window_tabs {
                        button {
                            style: if selected {
                                "font-size: 11px; padding: 2px 8px; border: 1px solid #cbd2d9; border-radius: 4px; background: #e4e7eb; cursor: pointer;"
                            } else {
                                "font-size: 11px; padding: 2px 8px; border: 1px solid transparent; border-radius: 4px; background: none; cursor: pointer; color: #7b8794;"
                            },
                            onclick: move |_| window.set(value),
                            "{label}"
                        }
                    }
                }
            }
            select {
                style: "font-size: 12px; margin-bottom: 6px; padding: 2px 4px;",
                onchange: move |evt: Event<FormData>| {
                    let value = evt.value();
                    if let Some(selected) = Metric::ALL
                        .iter()
                        .find(|m| m.label() == value)
                    {
                        metric.set(*selected);
                    }
                },
                for (_, label, selected) in metric_options {
                    option {
                        value: "{label}",
                        selected: selected,
                        "{label}"
                    }
                }
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 120 }
        }
    }
}

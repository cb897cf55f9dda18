//! Bin status donut widget.

use crate::components::{ChartContainer, CARD_STYLE, CARD_TITLE_STYLE};
use crate::js_bridge;
use dioxus::prelude::*;
use wms_charts::status::{slice_percentage, total_bins, SAMPLE_STATUS};

const CHART_ID: &str = "status-chart";

#[component]
pub fn StatusChart() -> Element {
    use_effect(|| {
        let data_json = serde_json::to_string(&SAMPLE_STATUS).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "height": 150,
            "total": total_bins(&SAMPLE_STATUS),
        }))
        .unwrap_or_default();
        js_bridge::render_pie_chart(CHART_ID, &data_json, &config_json);
    });

    let legend: Vec<(String, &str)> = SAMPLE_STATUS
        .iter()
        .map(|slice| {
            (
                format!(
                    "{}: {} ({}%)",
                    slice.name,
                    slice.value,
                    slice_percentage(&SAMPLE_STATUS, slice)
                ),
                slice.color,
            )
        })
        .collect();

    rsx! {
        div {
            style: CARD_STYLE,
            h4 { style: CARD_TITLE_STYLE, "Status of Trash Bins" }
            ChartContainer { id: CHART_ID.to_string(), min_height: 150 }
            div {
                style: "display: flex; gap: 12px; justify-content: center; margin-top: 6px; flex-wrap: wrap;",
                for (label, color) in legend {
                    div {
                        style: "display: flex; align-items: center; gap: 4px; font-size: 11px;",
                        span {
                            style: "width: 10px; height: 10px; border-radius: 50%; background: {color}; display: inline-block;",
                        }
                        "{label}"
                    }
                }
            }
        }
    }
}

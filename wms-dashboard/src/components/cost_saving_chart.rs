//! Before/after collection cost comparison.

use crate::components::{ChartContainer, CARD_STYLE, CARD_TITLE_STYLE};
use crate::js_bridge;
use dioxus::prelude::*;
use wms_charts::savings::{total_savings, SAMPLE_QUARTERS};

const CHART_ID: &str = "cost-saving-chart";

const BEFORE_COLOR: &str = "#ef4444";
const AFTER_COLOR: &str = "#10b981";

#[component]
pub fn CostSavingChart() -> Element {
    use_effect(|| {
        let data_json = serde_json::to_string(&SAMPLE_QUARTERS).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "beforeColor": BEFORE_COLOR,
            "afterColor": AFTER_COLOR,
            "height": 150,
            "currency": "RM",
        }))
        .unwrap_or_default();
        js_bridge::render_bar_chart(CHART_ID, &data_json, &config_json);
    });

    let total = format!("{:.0}", total_savings(&SAMPLE_QUARTERS));

    rsx! {
        div {
            style: CARD_STYLE,
            h4 { style: CARD_TITLE_STYLE, "Cost Saving Matrix" }
            ChartContainer { id: CHART_ID.to_string(), min_height: 150 }
            div {
                style: "display: flex; gap: 12px; justify-content: center; margin-top: 6px; font-size: 11px;",
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span { style: "width: 10px; height: 10px; border-radius: 50%; background: {BEFORE_COLOR}; display: inline-block;" }
                    "Before"
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span { style: "width: 10px; height: 10px; border-radius: 50%; background: {AFTER_COLOR}; display: inline-block;" }
                    "After"
                }
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    span { style: "width: 10px; height: 10px; border-radius: 50%; background: #3b82f6; display: inline-block;" }
                    "Savings: RM {total}"
                }
            }
        }
    }
}

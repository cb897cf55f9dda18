//! Overview page: the three stat widgets and the region heatmap.

use crate::components::{CostSavingChart, MapHeatmap, MetricsChart, StatusChart};
use dioxus::prelude::*;

#[component]
pub fn OverviewPage() -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 16px; margin-bottom: 16px;",
            StatusChart {}
            MetricsChart {}
            CostSavingChart {}
        }
        MapHeatmap {}
    }
}

//! Top bar showing the product name and the active region.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SiteHeader() -> Element {
    let state = use_context::<AppState>();
    let subtitle = state
        .region
        .read()
        .active_region()
        .map(|region| format!("{} ({})", region.name, region.state))
        .unwrap_or_else(|| "No region selected".to_string());

    rsx! {
        header {
            style: "display: flex; align-items: baseline; gap: 12px; padding: 12px 16px; border-bottom: 1px solid #e4e7eb;",
            h1 {
                style: "margin: 0; font-size: 18px;",
                "Waste Management Dashboard"
            }
            span {
                style: "font-size: 13px; color: #7b8794;",
                "{subtitle}"
            }
        }
    }
}

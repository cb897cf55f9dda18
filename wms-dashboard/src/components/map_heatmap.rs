//! Region heatmap: sensor locations weighted by average fill level.
//!
//! Two-stage fetch through the gateway: the region's averages first, then
//! one location lookup per sensor, joined by id in `wms-charts`. The whole
//! collection either renders or the widget shows its error overlay.

use crate::components::{ChartContainer, ErrorDisplay, CARD_STYLE, CARD_TITLE_STYLE};
use crate::js_bridge;
use crate::state::{AppState, MapToken};
use dioxus::prelude::*;
use wms_api::client::ApiClient;
use wms_charts::heatmap;

const MAP_ID: &str = "region-heatmap";

#[component]
pub fn MapHeatmap() -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<ApiClient>();
    let token = use_context::<MapToken>();

    let mut features = use_signal(|| None::<serde_json::Value>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    // Re-query the analytics join whenever the active region changes.
    use_effect(move || {
        let region_id = state.region.read().active_region().map(|region| region.id);
        let Some(region_id) = region_id else { return };
        loading.set(true);
        error.set(None);
        let client = client.clone();
        spawn(async move {
            match heatmap::load_feature_collection(&client, region_id).await {
                Ok(collection) => features.set(Some(collection)),
                Err(err) => {
                    log::error!("Failed to load heatmap for region {}: {}", region_id, err);
                    error.set(Some("Failed to load heatmap data".to_string()));
                }
            }
            loading.set(false);
        });
    });

    // Redraw when the data lands.
    use_effect(move || {
        let Some(collection) = features.read().clone() else {
            return;
        };
        let config_json = serde_json::to_string(&serde_json::json!({
            "accessToken": token.0.as_str(),
            "radius": 20,
            "opacity": 0.8,
        }))
        .unwrap_or_default();
        js_bridge::render_heatmap_map(MAP_ID, &collection.to_string(), &config_json);
    });

    let message = error();
    let is_loading = loading() && features.read().is_none();

    rsx! {
        div {
            style: CARD_STYLE,
            h4 { style: CARD_TITLE_STYLE, "Average Fill Level" }
            if let Some(message) = message {
                ErrorDisplay { message }
            } else {
                ChartContainer {
                    id: MAP_ID.to_string(),
                    loading: is_loading,
                    min_height: 420,
                }
            }
        }
    }
}

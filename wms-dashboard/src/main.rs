//! Waste management dashboard.
//!
//! Single-page Dioxus app: a region switcher and lazily loaded city/sensor
//! tree in the sidebar, chart widgets plus the region heatmap in the main
//! pane, and a per-sensor detail view with recent history and an on-demand
//! fullness prediction.
//!
//! Data flow:
//! 1. On mount, the region list is fetched once and the first region
//!    becomes active.
//! 2. Changing the active region reloads the city list and re-queries the
//!    analytics heatmap.
//! 3. Expanding a city fetches its sensors the first time only; the list is
//!    cached for the session.
//! 4. Picking a sensor opens the detail view, which loads metadata and
//!    records independently.

mod components;
mod js_bridge;
mod state;

use components::{ErrorDisplay, NavSidebar, OverviewPage, SensorDetailView, SiteHeader};
use dioxus::prelude::*;
use state::{AppState, MapToken};
use wms_api::client::{ApiClient, Gateway};
use wms_api::config::{Config, ConfigError};

/// Compile-time configuration: a browser bundle has no process environment,
/// so both values are captured when the WASM is built.
const API_BASE_URL: Option<&str> = option_env!("WMS_API_BASE_URL");
const MAPBOX_ACCESS_TOKEN: Option<&str> = option_env!("WMS_MAPBOX_ACCESS_TOKEN");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wms-dashboard-root"))
        .launch(App);
}

/// Validate the baked-in configuration before mounting anything that
/// fetches. A misbuilt bundle fails here with a banner naming the missing
/// variable instead of a page of broken requests.
fn startup_config() -> Result<(Config, String), ConfigError> {
    let config = Config::from_values(API_BASE_URL, MAPBOX_ACCESS_TOKEN)?;
    let token = config.require_map_token()?.to_string();
    Ok((config, token))
}

#[component]
fn App() -> Element {
    match startup_config() {
        Ok((config, token)) => rsx! {
            Dashboard { config, token }
        },
        Err(err) => rsx! {
            div {
                style: "padding: 24px;",
                ErrorDisplay {
                    message: err.to_string(),
                }
            }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct DashboardProps {
    config: Config,
    token: String,
}

#[component]
fn Dashboard(props: DashboardProps) -> Element {
    let client = use_context_provider({
        let config = props.config.clone();
        move || ApiClient::new(&config)
    });
    let state = use_context_provider(AppState::new);
    use_context_provider({
        let token = props.token.clone();
        move || MapToken(token)
    });

    // Evaluate the chart scripts once; rendering polls until they are up.
    use_effect(|| {
        js_bridge::init_charts();
    });

    // One region fetch per session, on mount.
    let region_client = client.clone();
    use_effect(move || {
        let client = region_client.clone();
        let mut region = state.region;
        spawn(async move {
            if !region.write().begin_load() {
                return;
            }
            let result = client.regions().await;
            region.write().finish_load(result);
        });
    });

    // Reload the city list whenever the active region changes, including
    // the initial None -> Some transition.
    let cities_client = client.clone();
    use_effect(move || {
        let region_id = state.region.read().active_region().map(|region| region.id);
        let Some(region_id) = region_id else { return };
        let mut nav = state.nav;
        nav.write().begin_cities_load(region_id);
        let client = cities_client.clone();
        spawn(async move {
            let result = client.cities(region_id).await;
            nav.write().finish_cities_load(region_id, result);
        });
    });

    let showing_detail = state.detail.read().is_some();

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #1f2933;",
            NavSidebar {}
            div {
                style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",
                SiteHeader {}
                main {
                    style: "padding: 16px; flex: 1;",
                    if showing_detail {
                        SensorDetailView {}
                    } else {
                        OverviewPage {}
                    }
                }
            }
        }
    }
}

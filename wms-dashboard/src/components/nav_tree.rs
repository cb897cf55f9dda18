//! Sidebar: region switcher plus the lazy city → sensor tree.
//!
//! Expanding a city the first time dispatches its sensor fetch through the
//! navigation cache, which also arbitrates the at-most-once guarantee; the
//! tree itself only records which nodes are open.

use crate::components::RegionSwitcher;
use crate::state::AppState;
use dioxus::prelude::*;
use futures::join;
use wms_api::client::{ApiClient, Gateway};
use wms_api::model::City;
use wms_state::detail::{SensorDetail, DEFAULT_RECORD_LIMIT};

#[component]
pub fn NavSidebar() -> Element {
    rsx! {
        aside {
            style: "width: 260px; flex-shrink: 0; padding: 16px 12px; border-right: 1px solid #e4e7eb; background: #f8f9fa;",
            RegionSwitcher {}
            NavTree {}
        }
    }
}

#[component]
fn NavTree() -> Element {
    let state = use_context::<AppState>();

    let active = state.region.read().active_region().cloned();
    let Some(region) = active else {
        return rsx! {
            p {
                style: "font-size: 13px; color: #7b8794;",
                "Please select a region"
            }
        };
    };

    let nav = state.nav.read();
    let loading = nav.is_loading_cities();
    let cities = nav.cities().to_vec();
    drop(nav);

    rsx! {
        div {
            h4 {
                style: "margin: 8px 0; font-size: 12px; text-transform: uppercase; color: #7b8794;",
                "Cities in {region.name}"
            }
            if loading {
                p {
                    style: "font-size: 13px; color: #7b8794;",
                    "Loading cities..."
                }
            } else if cities.is_empty() {
                p {
                    style: "font-size: 13px; color: #7b8794;",
                    "No cities found"
                }
            } else {
                ul {
                    style: "list-style: none; margin: 0; padding: 0;",
                    for city in cities {
                        CityNode { city }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CityNodeProps {
    city: City,
}

/// One collapsible city row with its sensor sub-list.
#[component]
fn CityNode(props: CityNodeProps) -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<ApiClient>();
    let city_id = props.city.id;

    let is_open = state.expanded.read().contains(&city_id);
    let loading = state.nav.read().is_city_loading(city_id);
    let sensors = state.nav.read().sensors(city_id).map(<[_]>::to_vec);

    let toggle_client = client.clone();
    let on_toggle = move |_| {
        let mut state = state;
        let now_open = !state.expanded.read().contains(&city_id);
        if now_open {
            state.expanded.write().insert(city_id);
        } else {
            state.expanded.write().remove(&city_id);
        }
        // The cache decides whether this toggle needs a fetch; cached and
        // in-flight cities never re-dispatch.
        if state.nav.write().toggle_city(city_id, now_open) {
            let client = toggle_client.clone();
            let mut nav = state.nav;
            spawn(async move {
                let result = client
                    .city_with_sensors(city_id)
                    .await
                    .map(|city| city.sensors);
                nav.write().finish_city_fetch(city_id, result);
            });
        }
    };

    let chevron = if is_open { "▾" } else { "▸" };

    rsx! {
        li {
            style: "margin: 2px 0;",
            button {
                style: "width: 100%; display: flex; align-items: center; gap: 6px; padding: 6px 8px; border: none; background: none; cursor: pointer; font-size: 13px; text-align: left;",
                onclick: on_toggle,
                span { "{chevron}" }
                span { "{props.city.name}" }
            }
            if is_open {
                ul {
                    style: "list-style: none; margin: 0 0 4px 0; padding-left: 22px;",
                    if loading {
                        li {
                            style: "font-size: 12px; color: #7b8794; padding: 2px 0;",
                            "Loading sensors..."
                        }
                    } else if let Some(sensors) = sensors {
                        if sensors.is_empty() {
                            li {
                                style: "font-size: 12px; color: #7b8794; padding: 2px 0;",
                                "No sensors found"
                            }
                        }
                        for sensor in sensors {
                            SensorRow {
                                sensor_id: sensor.id,
                                name: sensor.name.clone(),
                            }
                        }
                    } else {
                        li {
                            style: "font-size: 12px; color: #7b8794; padding: 2px 0;",
                            "No sensors found"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SensorRowProps {
    sensor_id: i64,
    name: String,
}

#[component]
fn SensorRow(props: SensorRowProps) -> Element {
    let state = use_context::<AppState>();
    let client = use_context::<ApiClient>();
    let sensor_id = props.sensor_id;

    let on_select = move |_| {
        select_sensor(state, client.clone(), sensor_id);
    };

    rsx! {
        li {
            button {
                style: "width: 100%; padding: 3px 6px; border: none; background: none; cursor: pointer; font-size: 12px; color: #3e4c59; text-align: left;",
                onclick: on_select,
                "{props.name}"
            }
        }
    }
}

/// Open the detail view for a sensor and start its two independent fetches.
///
/// Metadata and records are issued together and applied separately, so
/// either may fail without touching the other. If the user picks a
/// different sensor before these settle, the store's id tag check drops the
/// late results.
fn select_sensor(state: AppState, client: ApiClient, sensor_id: i64) {
    let mut detail_signal = state.detail;
    detail_signal.set(Some(SensorDetail::new(sensor_id)));
    spawn(async move {
        let (sensor, records) = join!(
            client.sensor(sensor_id),
            client.latest_records(sensor_id, DEFAULT_RECORD_LIMIT)
        );
        if let Some(detail) = detail_signal.write().as_mut() {
            detail.finish_sensor(sensor_id, sensor);
            detail.finish_records(sensor_id, records);
        }
    });
}

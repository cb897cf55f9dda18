//! Dropdown selector for the active region.

use crate::components::ErrorDisplay;
use crate::state::AppState;
use dioxus::prelude::*;

/// Region dropdown at the top of the sidebar.
///
/// Reads the region store from context and routes changes through its
/// single writer operation, `set_active_region`.
#[component]
pub fn RegionSwitcher() -> Element {
    let state = use_context::<AppState>();

    let store = state.region.read();
    let is_loading = store.is_loading();
    let error = store.error().map(str::to_string);
    let regions = store.regions().to_vec();
    let active = store.active_region().cloned();
    drop(store);

    let mut region_signal = state.region;
    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let Ok(id) = value.parse::<i64>() else { return };
        let selected = region_signal
            .read()
            .regions()
            .iter()
            .find(|region| region.id == id)
            .cloned();
        if let Some(region) = selected {
            region_signal.write().set_active_region(region);
        }
    };

    let active_id = active.as_ref().map(|region| region.id);
    let emblem = active.as_ref().and_then(|region| region.emblem_url.clone());

    rsx! {
        div {
            style: "margin-bottom: 12px;",
            label {
                r#for: "region-select",
                style: "display: block; font-size: 11px; color: #7b8794; margin-bottom: 4px;",
                "Region"
            }
            if is_loading {
                div {
                    style: "font-size: 13px; color: #7b8794;",
                    "Loading regions..."
                }
            } else if let Some(message) = error {
                ErrorDisplay { message }
            } else {
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    if let Some(url) = emblem {
                        img {
                            src: "{url}",
                            alt: "Region emblem",
                            style: "width: 24px; height: 24px; object-fit: contain;",
                        }
                    }
                    select {
                        id: "region-select",
                        style: "flex: 1; padding: 4px 6px; font-size: 13px;",
                        onchange: on_change,
                        for region in regions.iter() {
                            option {
                                value: "{region.id}",
                                selected: Some(region.id) == active_id,
                                "{region.name} ({region.state})"
                            }
                        }
                    }
                }
            }
        }
    }
}

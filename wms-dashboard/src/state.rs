//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the session stores into a single struct of signals
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The stores themselves live in `wms-state`;
//! the signals only make them reactive.

use dioxus::prelude::*;
use std::collections::HashSet;
use wms_state::detail::SensorDetail;
use wms_state::navigation::NavigationCache;
use wms_state::region::RegionStore;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Region list and active-region selection.
    pub region: Signal<RegionStore>,
    /// Lazily populated city → sensors tree.
    pub nav: Signal<NavigationCache>,
    /// City nodes currently open in the sidebar.
    pub expanded: Signal<HashSet<i64>>,
    /// The sensor detail view, when one is showing.
    pub detail: Signal<Option<SensorDetail>>,
}

impl AppState {
    /// Create a new AppState with empty stores.
    pub fn new() -> Self {
        Self {
            region: Signal::new(RegionStore::new()),
            nav: Signal::new(NavigationCache::new()),
            expanded: Signal::new(HashSet::new()),
            detail: Signal::new(None),
        }
    }
}

/// Mapbox access token, validated at startup and provided via context for
/// the heatmap.
#[derive(Clone)]
pub struct MapToken(pub String);

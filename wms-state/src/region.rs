//! Session-wide region selection.

use log::error;
use wms_api::client::Gateway;
use wms_api::error::ApiError;
use wms_api::model::Region;

/// The active-region store read by every subtree of the dashboard.
///
/// Holds the fetched region list, the currently active region, and the
/// loading/error flags consumers observe. The list is fetched exactly once
/// per store lifetime; there is no automatic refetch.
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: Vec<Region>,
    active_region: Option<Region>,
    is_loading: bool,
    error: Option<String>,
    load_started: bool,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fetched regions, in server order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The active region, or `None` until a load succeeds (or forever, if it
    /// never does).
    pub fn active_region(&self) -> Option<&Region> {
        self.active_region.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark the one-per-lifetime region fetch as started.
    ///
    /// Returns `false` on every call after the first; the caller must not
    /// dispatch a fetch in that case.
    #[must_use]
    pub fn begin_load(&mut self) -> bool {
        if self.load_started {
            return false;
        }
        self.load_started = true;
        self.is_loading = true;
        true
    }

    /// Apply the result of the region fetch.
    ///
    /// On success the list is stored and, if no active region was set in the
    /// meantime, the first region becomes active. On failure the error flag
    /// is set and the active region stays `None`.
    pub fn finish_load(&mut self, result: Result<Vec<Region>, ApiError>) {
        match result {
            Ok(regions) => {
                if self.active_region.is_none() {
                    self.active_region = regions.first().cloned();
                }
                self.regions = regions;
                self.error = None;
            }
            Err(err) => {
                error!("Failed to fetch regions: {}", err);
                self.error = Some("Failed to load regions".to_string());
            }
        }
        self.is_loading = false;
    }

    /// Replace the active region synchronously.
    ///
    /// Never re-triggers the list fetch. The value is not checked against
    /// the fetched list; callers own the membership invariant.
    pub fn set_active_region(&mut self, region: Region) {
        self.active_region = Some(region);
    }

    /// Fetch the region list through `gateway`, at most once per lifetime.
    pub async fn load<G: Gateway>(&mut self, gateway: &G) {
        if !self.begin_load() {
            return;
        }
        let result = gateway.regions().await;
        self.finish_load(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{region, FakeGateway};

    #[test]
    fn first_region_becomes_active_by_default() {
        let mut store = RegionStore::new();
        assert!(store.begin_load());
        store.finish_load(Ok(vec![region(1, "Selangor"), region(2, "Perak")]));

        assert_eq!(store.regions().len(), 2);
        assert_eq!(store.active_region().map(|r| r.id), Some(1));
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn set_active_before_load_is_kept() {
        let mut store = RegionStore::new();
        // No region list yet; this must not panic.
        store.set_active_region(region(2, "Perak"));

        assert!(store.begin_load());
        store.finish_load(Ok(vec![region(1, "Selangor"), region(2, "Perak")]));

        // The pre-set region suppresses the regions[0] default.
        assert_eq!(store.active_region().map(|r| r.id), Some(2));
    }

    #[test]
    fn failed_load_sets_error_and_no_active_region() {
        let mut store = RegionStore::new();
        assert!(store.begin_load());
        store.finish_load(Err(ApiError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "fake:regions".to_string(),
        }));

        assert!(store.active_region().is_none());
        assert!(store.regions().is_empty());
        assert_eq!(store.error(), Some("Failed to load regions"));
        assert!(!store.is_loading());
    }

    #[test]
    fn setter_accepts_regions_outside_the_list() {
        let mut store = RegionStore::new();
        assert!(store.begin_load());
        store.finish_load(Ok(vec![region(1, "Selangor")]));

        store.set_active_region(region(99, "Not Fetched"));
        assert_eq!(store.active_region().map(|r| r.id), Some(99));
    }

    #[tokio::test]
    async fn load_fetches_at_most_once() {
        let gateway = FakeGateway {
            regions: vec![region(1, "Selangor")],
            ..FakeGateway::default()
        };
        let mut store = RegionStore::new();

        store.load(&gateway).await;
        store.load(&gateway).await;

        assert_eq!(gateway.call_count("regions"), 1);
        assert_eq!(store.active_region().map(|r| r.id), Some(1));
    }
}

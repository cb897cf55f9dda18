//! Lazily populated city → sensors navigation state for the sidebar tree.

use std::collections::{HashMap, HashSet};

use log::{error, warn};
use wms_api::client::Gateway;
use wms_api::error::ApiError;
use wms_api::model::{City, Sensor};

/// On-demand cache of each city's sensor list, keyed by city id.
///
/// A city's sensors are fetched the first time its node is expanded and kept
/// for the rest of the session; closing and reopening a node reuses the
/// cached list. An in-flight marker per city id keeps rapid open/close/open
/// toggling from issuing duplicate requests for the same city. There is no
/// eviction and no refresh: once fetched, a list is trusted for the session.
#[derive(Debug, Default)]
pub struct NavigationCache {
    /// Region whose city list is (being) loaded. Completions for any other
    /// region are stale and get dropped.
    region_id: Option<i64>,
    cities: Vec<City>,
    cities_loading: bool,
    sensors_by_city: HashMap<i64, Vec<Sensor>>,
    in_flight: HashSet<i64>,
}

impl NavigationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cities of the active region, in server order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn is_loading_cities(&self) -> bool {
        self.cities_loading
    }

    /// The cached sensor list for a city, if its fetch has succeeded.
    pub fn sensors(&self, city_id: i64) -> Option<&[Sensor]> {
        self.sensors_by_city.get(&city_id).map(Vec::as_slice)
    }

    /// Whether a sensor fetch for this city is outstanding. Independent per
    /// city; several cities may load at once.
    pub fn is_city_loading(&self, city_id: i64) -> bool {
        self.in_flight.contains(&city_id)
    }

    /// Start (re)loading the city list for `region_id`. Called whenever the
    /// active region changes, including from none to a value.
    pub fn begin_cities_load(&mut self, region_id: i64) {
        self.region_id = Some(region_id);
        self.cities_loading = true;
    }

    /// Apply a city-list result. Replaces the full list; a failure degrades
    /// silently to an empty list with a logged error. Results for a region
    /// that is no longer current are discarded.
    pub fn finish_cities_load(&mut self, region_id: i64, result: Result<Vec<City>, ApiError>) {
        if self.region_id != Some(region_id) {
            warn!(
                "Discarding city list for region {}: active region changed",
                region_id
            );
            return;
        }
        self.cities_loading = false;
        match result {
            Ok(cities) => self.cities = cities,
            Err(err) => {
                error!("Failed to fetch cities for region {}: {}", region_id, err);
                self.cities = Vec::new();
            }
        }
    }

    /// Record a tree-node toggle.
    ///
    /// Returns `true` exactly when the caller must dispatch a sensor fetch
    /// for `city_id`: the node is opening, nothing is cached for the id, and
    /// no fetch for it is in flight. The in-flight marker is set before
    /// returning, so the sensor fetch for a given city id is issued at most
    /// once per session no matter how the node is toggled.
    #[must_use]
    pub fn toggle_city(&mut self, city_id: i64, now_open: bool) -> bool {
        if !now_open
            || self.sensors_by_city.contains_key(&city_id)
            || self.in_flight.contains(&city_id)
        {
            return false;
        }
        self.in_flight.insert(city_id);
        true
    }

    /// Apply a sensor-list result for one city.
    ///
    /// On success the list enters the cache and is immutable thereafter. On
    /// failure the error is logged and the cache stays empty, so a later
    /// expand may try again.
    pub fn finish_city_fetch(&mut self, city_id: i64, result: Result<Vec<Sensor>, ApiError>) {
        self.in_flight.remove(&city_id);
        match result {
            Ok(sensors) => {
                self.sensors_by_city.insert(city_id, sensors);
            }
            Err(err) => error!("Failed to fetch sensors for city {}: {}", city_id, err),
        }
    }

    /// Fetch and replace the city list for `region_id` through `gateway`.
    pub async fn load_cities<G: Gateway>(&mut self, gateway: &G, region_id: i64) {
        self.begin_cities_load(region_id);
        let result = gateway.cities(region_id).await;
        self.finish_cities_load(region_id, result);
    }

    /// Expand one city node, fetching its sensors unless cached or in
    /// flight.
    pub async fn expand_city<G: Gateway>(&mut self, gateway: &G, city_id: i64) {
        if !self.toggle_city(city_id, true) {
            return;
        }
        let result = gateway
            .city_with_sensors(city_id)
            .await
            .map(|city| city.sensors);
        self.finish_city_fetch(city_id, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{city, sensor, FakeGateway};

    fn server_error(name: &str) -> ApiError {
        ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: name.to_string(),
        }
    }

    #[test]
    fn sensors_fetch_at_most_once_per_city() {
        let mut cache = NavigationCache::new();

        // First open dispatches.
        assert!(cache.toggle_city(4, true));
        assert!(cache.is_city_loading(4));

        // Rapid close/open before the fetch resolves must not re-dispatch.
        assert!(!cache.toggle_city(4, false));
        assert!(!cache.toggle_city(4, true));

        cache.finish_city_fetch(4, Ok(vec![sensor(31, "Bin 31", 4)]));
        assert!(!cache.is_city_loading(4));

        // Cached now; reopening never fetches again.
        assert!(!cache.toggle_city(4, true));
        assert_eq!(cache.sensors(4).map(<[Sensor]>::len), Some(1));
    }

    #[test]
    fn failed_fetch_leaves_cache_empty_and_allows_retry() {
        let mut cache = NavigationCache::new();
        assert!(cache.toggle_city(4, true));
        cache.finish_city_fetch(4, Err(server_error("city_with_sensors:4")));

        assert!(cache.sensors(4).is_none());
        assert!(!cache.is_city_loading(4));

        // A later expand may try again.
        assert!(cache.toggle_city(4, true));
    }

    #[test]
    fn per_city_loading_flags_are_independent() {
        let mut cache = NavigationCache::new();
        assert!(cache.toggle_city(4, true));
        assert!(cache.toggle_city(5, true));

        assert!(cache.is_city_loading(4));
        assert!(cache.is_city_loading(5));

        cache.finish_city_fetch(5, Ok(vec![]));
        assert!(cache.is_city_loading(4));
        assert!(!cache.is_city_loading(5));
    }

    #[test]
    fn city_list_failure_degrades_to_empty() {
        let mut cache = NavigationCache::new();
        cache.begin_cities_load(1);
        cache.finish_cities_load(1, Ok(vec![city(4, "Shah Alam", 1)]));
        assert_eq!(cache.cities().len(), 1);

        cache.begin_cities_load(1);
        cache.finish_cities_load(1, Err(server_error("cities:1")));
        assert!(cache.cities().is_empty());
        assert!(!cache.is_loading_cities());
    }

    #[test]
    fn stale_city_list_is_discarded() {
        let mut cache = NavigationCache::new();
        cache.begin_cities_load(1);
        // The user switches region before the first response lands.
        cache.begin_cities_load(2);

        cache.finish_cities_load(1, Ok(vec![city(4, "Shah Alam", 1)]));
        assert!(cache.cities().is_empty());
        assert!(cache.is_loading_cities());

        cache.finish_cities_load(2, Ok(vec![city(7, "Ipoh", 2)]));
        assert_eq!(cache.cities().len(), 1);
        assert_eq!(cache.cities()[0].id, 7);
    }

    #[test]
    fn sensor_cache_survives_region_switches() {
        let mut cache = NavigationCache::new();
        assert!(cache.toggle_city(4, true));
        cache.finish_city_fetch(4, Ok(vec![sensor(31, "Bin 31", 4)]));

        cache.begin_cities_load(2);
        cache.finish_cities_load(2, Ok(vec![city(7, "Ipoh", 2)]));

        assert!(cache.sensors(4).is_some());
    }

    #[tokio::test]
    async fn expand_city_caches_last_successful_fetch() {
        let mut gateway = FakeGateway::default();
        gateway
            .sensors_by_city
            .insert(4, vec![sensor(31, "Bin 31", 4), sensor(32, "Bin 32", 4)]);

        let mut cache = NavigationCache::new();
        cache.expand_city(&gateway, 4).await;
        cache.expand_city(&gateway, 4).await;

        assert_eq!(gateway.call_count("city_with_sensors:4"), 1);
        let shown: Vec<i64> = cache.sensors(4).unwrap().iter().map(|s| s.id).collect();
        assert_eq!(shown, vec![31, 32]);
    }
}

//! Session state for the waste management dashboard.
//!
//! Three stores cover everything stateful the UI needs: the region
//! selection ([`region::RegionStore`]), the lazily populated city → sensors
//! tree ([`navigation::NavigationCache`]), and one sensor's detail view
//! ([`detail::SensorDetail`]).
//!
//! The stores are framework-free. Each exposes small synchronous transition
//! methods (`begin_*` / `finish_*`) that a reactive UI drives around its own
//! task spawns, plus async convenience methods that compose the same
//! transitions over an injected [`wms_api::client::Gateway`] for the CLI and
//! for tests. All mutable state is single-owner; there is no locking.
//!
//! Stale results are handled uniformly: completions carry the region or
//! sensor id they were fetched for, and a store discards a completion whose
//! id no longer matches its current target.

pub mod detail;
pub mod navigation;
pub mod region;

#[cfg(test)]
pub(crate) mod testutil;

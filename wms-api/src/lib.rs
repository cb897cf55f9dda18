//! Core types and REST client for the waste management sensor network.
//!
//! The remote API exposes a read-only hierarchy of regions, cities, and
//! trash-level sensors, plus per-sensor history, analytics averages, and an
//! on-demand fullness prediction. This crate carries the typed data model,
//! the environment-driven configuration, the error taxonomy, and the
//! [`client::Gateway`] seam that both the dashboard and the CLI fetch
//! through.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

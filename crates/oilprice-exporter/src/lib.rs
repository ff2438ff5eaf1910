//! Heating-oil price exporter library entry.
//!
//! This crate wires the CLI/config layer, the page fetcher, the scrape cycle and
//! scheduler, and the gauge registry behind an axum `/metrics` route. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod scrape;

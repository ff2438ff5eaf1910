//! In-process metrics.
//!
//! The scrape loop writes the lowest prices here and the `/metrics` handler
//! renders them in Prometheus text format.

pub mod metrics;

pub use metrics::PriceMetrics;

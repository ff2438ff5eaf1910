//! oilprice core: error types, price series definitions, and the price extractor.
//!
//! This crate knows how to turn a parsed HTML page into a lowest price for a
//! series. It carries no network or runtime dependencies so the extraction
//! rules can be exercised directly against fixture documents.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed pages surface as `OilPriceError`/`Result` so the exporter keeps
//! serving the last known values when the upstream layout drifts.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod price;
pub mod series;

/// Shared result type.
pub use error::{OilPriceError, Result};
pub use price::{extract_minimum_price, parse_price};
pub use series::{Locator, PriceSeries};

//! Top-level facade crate for the heating-oil price exporter.
//!
//! Re-exports the core extraction types and the exporter library so users can depend on a single crate.

pub mod core {
    pub use oilprice_core::*;
}

pub mod exporter {
    pub use oilprice_exporter::*;
}

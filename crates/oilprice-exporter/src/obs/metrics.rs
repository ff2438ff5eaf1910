//! Price gauge registry.
//!
//! Gauges are declared once at startup from the configured series and hold an
//! `f64` stored as raw bits in an `AtomicU64`, so a reader always sees a whole
//! value. A gauge that has never been set has no entry and renders without a
//! sample line.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use oilprice_core::PriceSeries;

/// Helper to escape `# HELP` text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

#[derive(Debug, Clone)]
struct GaugeDesc {
    name: String,
    help: String,
}

#[derive(Default)]
pub struct PriceMetrics {
    descs: Vec<GaugeDesc>,
    values: DashMap<String, AtomicU64>,
}

impl PriceMetrics {
    /// Declare one gauge per series, in series order.
    pub fn new(series: &[PriceSeries]) -> Self {
        Self {
            descs: series
                .iter()
                .map(|s| GaugeDesc { name: s.metric.clone(), help: s.help.clone() })
                .collect(),
            values: DashMap::new(),
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.descs.iter().any(|d| d.name == name)
    }

    /// Store a new value. Unknown gauge names are ignored.
    pub fn set(&self, name: &str, v: f64) {
        if !self.is_registered(name) {
            tracing::warn!(metric = %name, "set on undeclared gauge ignored");
            return;
        }
        let bits = v.to_bits();
        if let Some(gauge) = self.values.get(name) {
            gauge.store(bits, Ordering::Release);
            return;
        }
        self.values
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(bits))
            .store(bits, Ordering::Release);
    }

    /// Current value, or `None` if the gauge was never set.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .get(name)
            .map(|g| f64::from_bits(g.load(Ordering::Acquire)))
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for d in &self.descs {
            let _ = writeln!(out, "# HELP {} {}", d.name, escape_help(&d.help));
            let _ = writeln!(out, "# TYPE {} gauge", d.name);
            if let Some(v) = self.get(&d.name) {
                let _ = writeln!(out, "{} {}", d.name, v);
            }
        }
        out
    }
}

use std::collections::HashSet;

use serde::Deserialize;
use oilprice_core::error::{OilPriceError, Result};
use oilprice_core::PriceSeries;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub series: Vec<SeriesConfig>,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OilPriceError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        if self.series.is_empty() {
            return Err(OilPriceError::Config("series must not be empty".into()));
        }

        let mut names = HashSet::new();
        let mut metrics = HashSet::new();
        for s in &self.series {
            s.validate()?;
            if !names.insert(s.name.as_str()) {
                return Err(OilPriceError::Config(format!("duplicate series name: {}", s.name)));
            }
            if !metrics.insert(s.metric.as_str()) {
                return Err(OilPriceError::Config(format!("duplicate metric: {}", s.metric)));
            }
        }
        Ok(())
    }

    /// Compile every entry into a `PriceSeries` (locators are parsed here).
    pub fn to_series(&self) -> Result<Vec<PriceSeries>> {
        self.series.iter().map(SeriesConfig::to_series).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    pub name: String,
    pub locator: String,
    pub metric: String,
    #[serde(default)]
    pub help: Option<String>,
}

impl SeriesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OilPriceError::Config("series.name must not be empty".into()));
        }
        if !is_valid_metric_name(&self.metric) {
            return Err(OilPriceError::Config(format!(
                "series {}: invalid metric name {:?}",
                self.name, self.metric
            )));
        }
        Ok(())
    }

    fn to_series(&self) -> Result<PriceSeries> {
        let help = match &self.help {
            Some(h) => h.clone(),
            None => format!("The lowest {} price per gallon available in USD", self.name),
        };
        PriceSeries::new(&self.name, &self.locator, &self.metric, &help)
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

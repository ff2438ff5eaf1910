//! Exporter configuration: CLI flags plus an optional strict YAML series file.

pub mod cli;
pub mod schema;

use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use oilprice_core::error::{OilPriceError, Result};
use oilprice_core::PriceSeries;

pub use cli::{parse_duration, Args, SeriesPreset};
pub use schema::{ExporterConfig, SeriesConfig};

pub fn load_from_file(path: &Path) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OilPriceError::Config(format!("read config {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| OilPriceError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Validated runtime settings. Building these never touches the network.
#[derive(Debug, Clone)]
pub struct ExporterSettings {
    pub listen: SocketAddr,
    pub scrape_url: String,
    pub scrape_interval: Duration,
    pub metrics_path: String,
    /// `None` means the fetch may take arbitrarily long.
    pub fetch_timeout: Option<Duration>,
    pub series: Vec<PriceSeries>,
}

impl ExporterSettings {
    pub fn from_args(args: Args) -> Result<Self> {
        let scrape_url = args.scrape_url.trim().to_string();
        if scrape_url.is_empty() {
            return Err(OilPriceError::Config("--scrape-url is a required flag".into()));
        }
        let parsed = reqwest::Url::parse(&scrape_url)
            .map_err(|e| OilPriceError::Config(format!("--scrape-url {scrape_url:?} is invalid: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(OilPriceError::Config(format!(
                "--scrape-url must be http or https, got {}",
                parsed.scheme()
            )));
        }

        validate_metrics_path(&args.metrics_path)?;
        if args.scrape_interval.is_zero() {
            return Err(OilPriceError::Config("--scrape-interval must be greater than zero".into()));
        }

        let series = match &args.config {
            Some(path) => load_from_file(path)?.to_series()?,
            None => preset_series(args.series)?,
        };

        Ok(Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, args.port)),
            scrape_url,
            scrape_interval: args.scrape_interval,
            metrics_path: args.metrics_path,
            fetch_timeout: (!args.fetch_timeout.is_zero()).then_some(args.fetch_timeout),
            series,
        })
    }
}

/// The path is mounted as a literal axum route: no `:param`, `*wildcard`, or braces.
pub fn validate_metrics_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(OilPriceError::Config("--metrics-path must start with '/'".into()));
    }
    if path.contains(['{', '}', '?', '#']) {
        return Err(OilPriceError::Config(format!(
            "--metrics-path {path:?} must not contain '{{', '}}', '?' or '#'"
        )));
    }
    if path.split('/').any(|seg| seg.starts_with(':') || seg.starts_with('*')) {
        return Err(OilPriceError::Config(format!(
            "--metrics-path {path:?} must not contain ':' or '*' route segments"
        )));
    }
    Ok(())
}

pub fn preset_series(preset: SeriesPreset) -> Result<Vec<PriceSeries>> {
    match preset {
        SeriesPreset::Split => Ok(vec![PriceSeries::cash()?, PriceSeries::credit()?]),
        SeriesPreset::Single => Ok(vec![PriceSeries::single()?]),
    }
}

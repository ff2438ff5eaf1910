//! Command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

/// Which built-in series layout to publish when no config file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesPreset {
    /// `oil_lowest_price_cash` and `oil_lowest_price_credit`.
    Split,
    /// A single `oil_lowest_price` taken from the cash table.
    Single,
}

#[derive(Debug, Parser)]
#[command(version, about = "Prometheus exporter for the lowest posted heating-oil price")]
pub struct Args {
    /// The port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// The heating oil URL to scrape
    #[arg(long)]
    pub scrape_url: String,

    /// The interval at which to scrape the URL (e.g. 1h, 30m, 90s)
    #[arg(long, default_value = "1h", value_parser = parse_duration)]
    pub scrape_interval: Duration,

    /// The path to serve metrics on
    #[arg(long, default_value = "/metrics")]
    pub metrics_path: String,

    /// Upper bound on a single page fetch; 0s disables the timeout
    #[arg(long, default_value = "30s", value_parser = parse_duration)]
    pub fetch_timeout: Duration,

    /// Built-in series layout
    #[arg(long, value_enum, default_value_t = SeriesPreset::Split)]
    pub series: SeriesPreset,

    /// YAML file with an explicit series list (overrides --series)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse a duration such as `1h`, `1h30m`, `90s`, `1.5h` or `500ms`.
///
/// A bare `0` is accepted; any other number needs a unit.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err("empty duration".into());
    }

    let mut total = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration {s:?}"))?;
        if num_end == 0 {
            return Err(format!("invalid duration {s:?}"));
        }
        let value: f64 = rest[..num_end]
            .parse()
            .map_err(|_| format!("invalid number in duration {s:?}"))?;

        let unit_part = &rest[num_end..];
        let unit_end = unit_part
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(unit_part.len());
        let secs_per_unit = match &unit_part[..unit_end] {
            "ns" => 1e-9,
            "us" | "\u{b5}s" | "\u{3bc}s" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            other => return Err(format!("unknown unit {other:?} in duration {s:?}")),
        };

        total += value * secs_per_unit;
        rest = &unit_part[unit_end..];
    }

    Duration::try_from_secs_f64(total).map_err(|e| format!("duration {s:?} out of range: {e}"))
}

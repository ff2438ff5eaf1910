//! One fetch-parse-extract-publish pass.
//!
//! The fetch is the only await point; the parsed `Html` lives entirely inside
//! `publish_document` so the cycle future stays `Send`.

use scraper::Html;

use oilprice_core::error::ErrorKind;
use oilprice_core::{extract_minimum_price, PriceSeries};

use crate::obs::PriceMetrics;
use crate::scrape::source::DocumentSource;

/// Result for one series within a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesOutcome {
    Published(f64),
    Failed(ErrorKind),
}

/// What a cycle did. Callers are free to ignore it.
#[derive(Debug, Default, PartialEq)]
pub struct CycleReport {
    /// Set when the page could not be fetched; no series were attempted.
    pub fetch_error: Option<ErrorKind>,
    /// Per-series outcome, in series order.
    pub series: Vec<(String, SeriesOutcome)>,
}

impl CycleReport {
    pub fn outcome(&self, name: &str) -> Option<SeriesOutcome> {
        self.series.iter().find(|(n, _)| n == name).map(|(_, o)| *o)
    }

    pub fn published(&self) -> usize {
        self.series
            .iter()
            .filter(|(_, o)| matches!(o, SeriesOutcome::Published(_)))
            .count()
    }
}

/// The fixed inputs of a scrape cycle.
#[derive(Debug, Clone)]
pub struct ScrapeJob {
    pub url: String,
    pub series: Vec<PriceSeries>,
}

impl ScrapeJob {
    pub fn new(url: impl Into<String>, series: Vec<PriceSeries>) -> Self {
        Self { url: url.into(), series }
    }

    pub async fn run(&self, source: &dyn DocumentSource, sink: &PriceMetrics) -> CycleReport {
        run_scrape_cycle(source, &self.url, &self.series, sink).await
    }
}

/// Fetch `url` and publish the lowest price of every series into `sink`.
///
/// A fetch failure aborts the cycle. Extraction failures are per series and
/// leave that series' previous value in place.
pub async fn run_scrape_cycle(
    source: &dyn DocumentSource,
    url: &str,
    series: &[PriceSeries],
    sink: &PriceMetrics,
) -> CycleReport {
    tracing::debug!(%url, "scraping url");

    let body = match source.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(%url, kind = e.kind().as_str(), error = %e, "scrape cycle aborted");
            return CycleReport {
                fetch_error: Some(e.kind()),
                series: Vec::new(),
            };
        }
    };

    publish_document(&body, series, sink)
}

/// Parse `body` and publish each series independently.
pub fn publish_document(body: &str, series: &[PriceSeries], sink: &PriceMetrics) -> CycleReport {
    let doc = Html::parse_document(body);
    let mut report = CycleReport::default();

    for s in series {
        let outcome = match extract_minimum_price(&doc, &s.locator) {
            Ok(price) => {
                tracing::info!(series = %s.name, metric = %s.metric, price, "lowest price found");
                sink.set(&s.metric, price);
                SeriesOutcome::Published(price)
            }
            Err(e) => {
                tracing::error!(
                    series = %s.name,
                    kind = e.kind().as_str(),
                    error = %e,
                    "failed to find lowest price"
                );
                SeriesOutcome::Failed(e.kind())
            }
        };
        report.series.push((s.name.clone(), outcome));
    }

    report
}

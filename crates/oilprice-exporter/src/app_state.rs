//! Shared application state for the exporter.
//!
//! The gauge registry is owned here and handed to both the HTTP handler and
//! the scrape loop; nothing is process-global.

use std::sync::Arc;

use crate::config::ExporterSettings;
use crate::obs::PriceMetrics;
use crate::scrape::ScrapeJob;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<PriceMetrics>,
}

struct AppStateInner {
    settings: ExporterSettings,
    job: Arc<ScrapeJob>,
}

impl AppState {
    pub fn new(settings: ExporterSettings) -> Self {
        let metrics = Arc::new(PriceMetrics::new(&settings.series));
        let job = Arc::new(ScrapeJob::new(settings.scrape_url.clone(), settings.series.clone()));

        for s in &settings.series {
            tracing::info!(series = %s.name, metric = %s.metric, locator = %s.locator, "series configured");
        }

        Self {
            inner: Arc::new(AppStateInner { settings, job }),
            metrics,
        }
    }

    pub fn settings(&self) -> &ExporterSettings {
        &self.inner.settings
    }

    pub fn job(&self) -> Arc<ScrapeJob> {
        Arc::clone(&self.inner.job)
    }

    pub fn metrics(&self) -> Arc<PriceMetrics> {
        Arc::clone(&self.metrics)
    }
}

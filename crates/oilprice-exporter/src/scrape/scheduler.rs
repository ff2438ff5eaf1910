//! Background scrape loop.
//!
//! `run_once` is awaited at startup so the first `/metrics` read already has
//! data. `spawn` then loops: sleep for the interval, run a cycle. The sleep
//! starts after the previous cycle completes. A stop request only interrupts
//! the sleep; a running cycle always finishes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::obs::PriceMetrics;
use crate::scrape::cycle::{CycleReport, ScrapeJob};
use crate::scrape::source::DocumentSource;

pub struct Scheduler {
    source: Arc<dyn DocumentSource>,
    job: Arc<ScrapeJob>,
    sink: Arc<PriceMetrics>,
    interval: Duration,
}

impl Scheduler {
    pub fn new(
        source: Arc<dyn DocumentSource>,
        job: Arc<ScrapeJob>,
        sink: Arc<PriceMetrics>,
        interval: Duration,
    ) -> Self {
        Self { source, job, sink, interval }
    }

    /// Run one cycle on the caller's task.
    pub async fn run_once(&self) -> CycleReport {
        let report = self.job.run(self.source.as_ref(), &self.sink).await;
        tracing::debug!(
            published = report.published(),
            series = self.job.series.len(),
            fetch_failed = report.fetch_error.is_some(),
            "scrape cycle finished"
        );
        report
    }

    /// Start the loop on its own task.
    pub fn spawn(self) -> SchedulerHandle {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let interval = self.interval;

        let task = tokio::spawn(async move {
            tracing::info!(interval_secs = interval.as_secs_f64(), "scrape loop started");
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = stop_requested(&mut stop_rx) => break,
                }
                self.run_once().await;
            }
            tracing::info!("scrape loop stopped");
        });

        SchedulerHandle { stop: stop_tx, task }
    }
}

/// Resolves once `true` is sent. Never resolves if the sender is gone.
async fn stop_requested(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Owner side of a spawned scrape loop.
pub struct SchedulerHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Ask the loop to exit at its next sleep.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the loop task to exit.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "scrape loop task failed");
        }
    }
}

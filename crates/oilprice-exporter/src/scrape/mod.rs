//! Scraping: document source, scrape cycle, and the background scheduler.

pub mod cycle;
pub mod scheduler;
pub mod source;

pub use cycle::{publish_document, run_scrape_cycle, CycleReport, ScrapeJob, SeriesOutcome};
pub use scheduler::{Scheduler, SchedulerHandle};
pub use source::{DocumentSource, HttpSource};

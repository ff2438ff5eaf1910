//! Heating-oil price exporter
//!
//! - Scrapes the configured page once before serving, then every interval
//! - Publishes the lowest cash/credit price as gauges
//! - Serves them at `--metrics-path` in Prometheus text format

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oilprice_core::error::{OilPriceError, Result};
use oilprice_exporter::{
    app_state::AppState,
    config::{Args, ExporterSettings},
    router,
    scrape::{HttpSource, Scheduler},
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Validated before any network activity.
    let settings = ExporterSettings::from_args(args)?;
    let listen = settings.listen;

    let source = Arc::new(HttpSource::new(settings.fetch_timeout)?);
    let listener = router::bind(listen).await?;
    let state = AppState::new(settings);

    let scheduler = Scheduler::new(
        source,
        state.job(),
        state.metrics(),
        state.settings().scrape_interval,
    );
    scheduler.run_once().await;
    let scrape_loop = scheduler.spawn();

    // Connections queue on the bound socket until the first cycle is published.
    let app = router::build_router(state.clone());
    tracing::info!(%listen, path = %state.settings().metrics_path, "oilprice-exporter serving metrics");
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| OilPriceError::Io(format!("server failed: {e}")));

    scrape_loop.stop();
    scrape_loop.join().await;
    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}

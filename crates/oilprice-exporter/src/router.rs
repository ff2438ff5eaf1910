//! Axum router wiring.
//!
//! Exposes a single GET route at the configured metrics path.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use oilprice_core::error::{OilPriceError, Result};

use crate::{app_state::AppState, ops};

/// Bind the metrics listener.
pub async fn bind(listen: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(listen)
        .await
        .map_err(|e| OilPriceError::Io(format!("failed to bind {listen}: {e}")))
}

pub fn build_router(state: AppState) -> Router {
    let path = state.settings().metrics_path.clone();
    Router::new()
        .route(&path, get(ops::metrics))
        .with_state(state)
}

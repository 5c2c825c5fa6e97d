//! HTTP surface of the PC parts assistant.
//!
//! Public API: [`build_router`] and [`start`]. The router serves the
//! fulfillment webhook (`POST /webhook`) and a liveness probe (`GET /`) over a
//! read-only [`parts_catalog::PartsCatalog`] held in [`AppState`].

mod core;
pub mod dialogflow;
pub mod error_handler;
pub mod fulfillment;
mod middleware_layer;
mod routes;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

pub use crate::core::app_state::{AppConfig, AppState, ConfigError};
pub use crate::error_handler::{AppError, AppResult};
pub use crate::middleware_layer::request_id::REQUEST_ID_HEADER;
pub use crate::routes::health_route::HEALTH_TEXT;

use crate::middleware_layer::request_id::stamp_request_id;
use crate::routes::{health_route::health_route, webhook_route::webhook_route};

/// Router with all routes and middleware, ready to serve or to drive in tests.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_route))
        .route("/webhook", post(webhook_route))
        .layer(middleware::from_fn(stamp_request_id))
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C.
pub async fn start(state: AppState) -> AppResult<()> {
    let addr = state.config.bind_addr();
    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(%addr, "webhook server listening, POST /webhook");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

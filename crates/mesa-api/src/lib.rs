//! Mesa API - HTTP surface for the reservation service
//!
//! Axum server exposing the public reservation endpoints and the
//! token-guarded moderation endpoints, with CORS for the website and
//! graceful shutdown on SIGINT/SIGTERM.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use state::AppState;

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::routing::{get, post};
use axum::Router;
use mesa_core::errors::{MesaError, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Build the application router
///
/// Separate from [`start_server`] so tests can drive it with oneshot
/// requests instead of a live socket.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/reservations", post(handlers::reservations::create))
        .route("/reservations", get(handlers::reservations::lookup))
        .route("/reservations/:id", get(handlers::reservations::get_by_id))
        .route("/admin/reservations", get(handlers::admin::list))
        .route(
            "/admin/reservations/:id/approve",
            post(handlers::admin::approve),
        )
        .route(
            "/admin/reservations/:id/reject",
            post(handlers::admin::reject),
        )
        .layer(cors)
        .with_state(state)
}

/// Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// Bind and serve until a shutdown signal arrives
pub async fn start_server(config: Config) -> Result<()> {
    let state = AppState::new(config)?;

    let address = format!("0.0.0.0:{}", state.config.port);
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| MesaError::Internal {
            message: format!("failed to bind {}: {}", address, e),
        })?;
    info!("Server running on {}", address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MesaError::Internal {
            message: format!("server error: {}", e),
        })?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!("failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

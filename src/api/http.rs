//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{self, CorsLayer};
use tracing::{info, warn};

use super::rest::{mcp, search};
use super::state::AppState;
use crate::config::CorsOrigin;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/health", get(health_check))
        .route("/search", post(search::search_directory))
        .route("/suggestions", post(search::suggest_terms))
        .route("/mcp", post(mcp::mcp_endpoint))
        .layer(cors)
        .with_state(state)
}

/// Serve the router until Ctrl+C
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!("shutting down");
}

fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    match origin {
        CorsOrigin::Any => layer.allow_origin(cors::Any),
        CorsOrigin::Exact(value) => match HeaderValue::from_str(value) {
            Ok(value) => layer.allow_origin(value),
            Err(_) => {
                warn!(origin = %value, "invalid CORS origin, allowing any");
                layer.allow_origin(cors::Any)
            }
        },
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

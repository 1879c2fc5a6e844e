//! MCP endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::ApiError;
use crate::api::state::AppState;

/// POST /mcp - Dispatch one JSON-RPC message
///
/// Tools may block on network I/O, so dispatch runs on the blocking pool.
/// Notifications are acknowledged with `202 Accepted` and no body.
pub async fn mcp_endpoint(State(state): State<Arc<AppState>>, body: String) -> Response {
    let server = state.mcp.clone();

    match tokio::task::spawn_blocking(move || server.handle_message(&body)).await {
        Ok(Some(response)) => Json(response).into_response(),
        Ok(None) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            error!(error = %e, "MCP dispatch task failed");
            let error = ApiError::internal("MCP dispatch failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
        }
    }
}

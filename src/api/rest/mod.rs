//! REST API module for HTTP endpoints
//!
//! - `POST /search` - Ranked local search
//! - `POST /suggestions` - Spelling suggestions
//! - `POST /mcp` - JSON-RPC (MCP) messages

pub mod mcp;
pub mod search;

use serde::{Deserialize, Serialize};

/// Body accepted by the search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct QueryBody {
    /// Missing or null reads as an empty query
    #[serde(default)]
    pub query: Option<String>,
}

impl QueryBody {
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

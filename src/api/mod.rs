//! API module for HTTP endpoints
//!
//! Thin transport over the search core and the MCP dispatcher.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;

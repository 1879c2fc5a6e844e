//! Data types for the clinic search server
//!
//! This module contains the directory records and the ranked results built from them.

mod article;
mod doctor;
mod result;

pub use article::{Article, EXCERPT_CHARS};
pub use doctor::Doctor;
pub use result::{MatchType, ResultDetail, ScoredResult};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

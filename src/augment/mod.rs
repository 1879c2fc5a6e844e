//! Optional AI web-search augmentation
//!
//! Augmentation results travel next to the local ranking in a response and
//! are never merged into it.

mod extract;
mod openai;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::AiConfig;

pub use extract::extract_json_array;
pub use openai::{build_prompt, OpenAiAugmenter, ResponsesOutput, RESPONSES_ENDPOINT};

/// Failure of an augmentation call
#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI service returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Source of extra, externally found results for a query
pub trait Augmenter: Send + Sync {
    /// Fetch additional results for `query` as loosely-typed JSON objects
    ///
    /// May block on network I/O.
    fn augment(&self, query: &str) -> Result<Vec<Value>, AugmentError>;
}

/// Augmenter used when no AI service is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAugmenter;

impl Augmenter for DisabledAugmenter {
    fn augment(&self, _query: &str) -> Result<Vec<Value>, AugmentError> {
        Ok(Vec::new())
    }
}

/// Pick the augmenter for an optional AI configuration
pub fn from_config(config: Option<&AiConfig>) -> Result<Arc<dyn Augmenter>, AugmentError> {
    match config {
        Some(ai) => {
            let augmenter = OpenAiAugmenter::new(ai)?;
            info!(model = %augmenter.model(), "AI augmentation enabled");
            Ok(Arc::new(augmenter))
        }
        None => {
            info!("AI augmentation disabled: no API key configured");
            Ok(Arc::new(DisabledAugmenter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_augmenter_returns_nothing() {
        assert!(DisabledAugmenter.augment("heart").unwrap().is_empty());
    }

    #[test]
    fn test_status_error_message() {
        let err = AugmentError::Status {
            status: 401,
            message: "bad key".to_string(),
        };
        assert_eq!(err.to_string(), "AI service returned 401: bad key");
    }
}

//! AI search tool

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::augment::Augmenter;
use crate::directory::Directory;
use crate::protocol::{McpTool, Tool};
use crate::search::UniformJitter;
use crate::server::{query_argument, text_response};
use crate::types::{McpResult, ScoredResult};

/// Tool that ranks the local directory and, when configured, asks an AI
/// web search for more results
pub struct AiSearchTool {
    directory: Arc<Directory>,
    augmenter: Arc<dyn Augmenter>,
}

impl AiSearchTool {
    pub fn new(directory: Arc<Directory>, augmenter: Arc<dyn Augmenter>) -> Self {
        Self {
            directory,
            augmenter,
        }
    }
}

/// Body of the `ai_search` text content
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchPayload {
    pub success: bool,
    pub query: String,
    pub local_results: Vec<ScoredResult>,
    pub ai_results: Vec<Value>,
    pub count: ResultCount,
}

#[derive(Debug, Serialize)]
pub struct ResultCount {
    pub local: usize,
    pub ai: usize,
}

impl Tool for AiSearchTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "ai_search".to_string(),
            description: "Search clinic doctors and health articles, plus AI web results when available."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text query, e.g. a symptom, department or doctor name"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    fn execute(&self, arguments: Value) -> McpResult<Value> {
        let query = query_argument(&arguments);

        let local_results = self.directory.search(query, &mut UniformJitter::new());

        let ai_results = if query.trim().is_empty() {
            Vec::new()
        } else {
            self.augmenter.augment(query).unwrap_or_else(|e| {
                warn!(error = %e, "AI augmentation failed");
                Vec::new()
            })
        };

        let payload = AiSearchPayload {
            success: true,
            query: query.to_string(),
            count: ResultCount {
                local: local_results.len(),
                ai: ai_results.len(),
            },
            local_results,
            ai_results,
        };

        Ok(text_response(serde_json::to_string_pretty(&payload)?))
    }
}

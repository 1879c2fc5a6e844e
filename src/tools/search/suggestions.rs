//! Search suggestions tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::directory::Directory;
use crate::protocol::{McpTool, Tool};
use crate::server::{query_argument, text_response};
use crate::types::McpResult;

/// Tool suggesting directory terms close to a misspelled query
pub struct SuggestionsTool {
    directory: Arc<Directory>,
}

impl SuggestionsTool {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }
}

impl Tool for SuggestionsTool {
    fn definition(&self) -> McpTool {
        McpTool {
            name: "search_suggestions".to_string(),
            description: "Suggest correctly spelled department, specialty and topic terms for a query"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The query to find spelling suggestions for"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    fn execute(&self, arguments: Value) -> McpResult<Value> {
        let query = query_argument(&arguments);
        let suggestions = self.directory.suggestions(query);
        let body = json!({
            "query": query,
            "suggestions": suggestions,
        });
        Ok(text_response(serde_json::to_string_pretty(&body)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Doctor;

    #[test]
    fn test_suggestions_tool() {
        let directory = Arc::new(Directory::new(
            vec![Doctor::new("Dr. Vy", "Neurology", "Memory")],
            vec![],
        ));
        let tool = SuggestionsTool::new(directory);
        assert_eq!(tool.name(), "search_suggestions");

        let result = tool.execute(json!({"query": "nuerology"})).unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["suggestions"], json!(["neurology"]));
    }
}

//! Helpers shared by the server and the tools
//!
//! Argument extraction and the MCP text content builder.

use serde_json::{json, Map, Value};

/// Extract tool arguments from params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// The `query` argument of a tool call; missing or non-string reads as empty
pub fn query_argument(arguments: &Value) -> &str {
    arguments
        .get("query")
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

/// Build a text content response
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

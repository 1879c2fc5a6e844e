//! MCP Server implementation
//!
//! Dispatches JSON-RPC messages to registered tools. The same dispatcher
//! backs the stdio transport and the HTTP `/mcp` endpoint.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// MCP Server that answers JSON-RPC messages
pub struct McpServer {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl McpServer {
    /// Create a new MCP server with default settings
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a new MCP server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.name();
        self.tools.insert(name, tool);
        self
    }

    /// Get the number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// Serve newline-delimited JSON-RPC over stdin/stdout (blocking)
    pub fn run_stdio(&self) -> McpResult<()> {
        info!(
            name = %self.server_info.name,
            tools = self.tools.len(),
            "MCP server listening on stdio"
        );

        let stdin = io::stdin();
        let mut writer = io::BufWriter::new(io::stdout());

        for line in stdin.lock().lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(trimmed) {
                writeln!(writer, "{}", serde_json::to_string(&response)?)?;
                writer.flush()?;
            }
        }
        Ok(())
    }

    /// Handle a single raw JSON-RPC message
    ///
    /// Returns None when the message is a notification.
    pub fn handle_message(&self, raw: &str) -> Option<Value> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(req) => req,
            Err(e) => {
                warn!(error = %e, "unparseable JSON-RPC message");
                return Some(to_value(JsonRpcError::parse_error(e.to_string())));
            }
        };
        self.handle_request(request)
    }

    /// Handle a parsed JSON-RPC request
    pub fn handle_request(&self, request: JsonRpcRequest) -> Option<Value> {
        let id = request.id_or_null();

        if !request.is_valid() {
            return Some(to_value(JsonRpcError::invalid_request(
                id,
                "jsonrpc must be '2.0'",
            )));
        }

        debug!(method = %request.method, "JSON-RPC request");

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            m if m.starts_with("notifications/") => return None,
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tool_call(id, request.params),
            "ping" => success(id, json!({})),
            other => to_value(JsonRpcError::method_not_found(id, other)),
        };
        Some(response)
    }

    fn handle_initialize(&self, id: Value) -> Value {
        success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": self.server_info.name,
                    "version": self.server_info.version
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Value) -> Value {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        success(id, json!({ "tools": tools }))
    }

    fn handle_tool_call(&self, id: Value, params: Option<Value>) -> Value {
        let Some(params) = params else {
            return to_value(JsonRpcError::invalid_params(
                id,
                "Missing parameters",
                json!({}),
            ));
        };

        let Some(tool_name) = extract_tool_name(&params) else {
            return to_value(JsonRpcError::invalid_params(
                id,
                "Missing tool name",
                json!({}),
            ));
        };

        let Some(tool) = self.tools.get(tool_name) else {
            return to_value(JsonRpcError::unknown_tool(id, tool_name));
        };

        match tool.execute(extract_arguments(&params)) {
            Ok(result) => success(id, result),
            Err(e) => {
                warn!(tool = %tool_name, error = %e, "tool execution failed");
                to_value(JsonRpcError::internal_error(
                    id,
                    "Tool execution error",
                    e.to_string(),
                ))
            }
        }
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn success(id: Value, result: Value) -> Value {
    to_value(JsonRpcResponse::new(id, result))
}

fn to_value<T: Serialize>(message: T) -> Value {
    // Envelopes hold only strings, integers and JSON values.
    serde_json::to_value(message).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR};

    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> McpTool {
            McpTool {
                name: "echo".to_string(),
                description: "Echo the query".to_string(),
                input_schema: json!({"type": "object"}),
            }
        }

        fn execute(&self, arguments: Value) -> McpResult<Value> {
            match arguments.get("fail") {
                Some(_) => Err("asked to fail".into()),
                None => Ok(text_response(query_argument(&arguments).to_string())),
            }
        }
    }

    fn server() -> McpServer {
        let mut server = McpServer::new();
        server.register_tool(Box::new(EchoTool));
        server
    }

    #[test]
    fn test_initialize() {
        let response = server()
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "clinic-ai-search");
    }

    #[test]
    fn test_notification_has_no_response() {
        let response =
            server().handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#);
        assert!(response.is_none());
    }

    #[test]
    fn test_tools_list_and_call() {
        let server = server();
        assert_eq!(server.tool_count(), 1);

        let list = server
            .handle_message(r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#)
            .unwrap();
        assert_eq!(list["result"]["tools"][0]["name"], "echo");
        assert!(list["result"]["tools"][0].get("inputSchema").is_some());

        let call = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"echo","arguments":{"query":"skin"}}}"#,
            )
            .unwrap();
        assert_eq!(call["result"]["content"][0]["text"], "skin");
    }

    #[test]
    fn test_error_codes() {
        let server = server();

        let parse = server.handle_message("{oops").unwrap();
        assert_eq!(parse["error"]["code"], PARSE_ERROR);

        let version = server
            .handle_message(r#"{"jsonrpc":"1.0","id":1,"method":"ping"}"#)
            .unwrap();
        assert_eq!(version["error"]["code"], INVALID_REQUEST);

        let unknown = server
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"resources/list"}"#)
            .unwrap();
        assert_eq!(unknown["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(unknown["error"]["message"], "Method not found");

        let no_tool = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"missing"}}"#,
            )
            .unwrap();
        assert_eq!(no_tool["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(no_tool["error"]["data"]["tool"], "missing");

        let no_name = server
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{}}"#)
            .unwrap();
        assert_eq!(no_name["error"]["code"], INVALID_PARAMS);

        let failed = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"echo","arguments":{"fail":true}}}"#,
            )
            .unwrap();
        assert_eq!(failed["error"]["code"], -32603);
        assert_eq!(failed["error"]["data"]["details"], "asked to fail");
    }

    #[test]
    fn test_ping() {
        let response = server()
            .handle_message(r#"{"jsonrpc":"2.0","id":9,"method":"ping"}"#)
            .unwrap();
        assert_eq!(response["result"], json!({}));
    }
}

//! MCP Tools implementation
//!
//! - `ai_search`: ranked local results plus optional AI web results
//! - `search_suggestions`: spelling suggestions from the directory vocabulary

pub mod search;

use std::sync::Arc;

use crate::augment::Augmenter;
use crate::directory::Directory;
use crate::server::McpServer;

pub use search::{AiSearchTool, SuggestionsTool};

/// Register all tools with the MCP server
pub fn register_all_tools(
    server: &mut McpServer,
    directory: Arc<Directory>,
    augmenter: Arc<dyn Augmenter>,
) {
    server.register_tool(Box::new(AiSearchTool::new(directory.clone(), augmenter)));
    server.register_tool(Box::new(SuggestionsTool::new(directory)));
}

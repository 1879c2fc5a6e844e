//! Shared state for the HTTP handlers

use std::sync::Arc;

use crate::augment::Augmenter;
use crate::config::CorsOrigin;
use crate::directory::Directory;
use crate::server::McpServer;
use crate::tools::register_all_tools;

/// State shared by every request
pub struct AppState {
    pub directory: Arc<Directory>,
    pub mcp: Arc<McpServer>,
    pub cors_origin: CorsOrigin,
}

impl AppState {
    /// Build the state and the MCP server behind `/mcp`
    pub fn new(
        directory: Arc<Directory>,
        augmenter: Arc<dyn Augmenter>,
        cors_origin: CorsOrigin,
    ) -> Self {
        let mut server = McpServer::new();
        register_all_tools(&mut server, directory.clone(), augmenter);

        Self {
            directory,
            mcp: Arc::new(server),
            cors_origin,
        }
    }
}

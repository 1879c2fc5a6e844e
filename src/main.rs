//! Clinic Search - Binary Entry Point
//!
//! `clinic-search` serves HTTP; `clinic-search --stdio` serves MCP over stdin/stdout.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use clinic_search::api::{self, AppState};
use clinic_search::augment;
use clinic_search::config::Config;
use clinic_search::directory::Directory;
use clinic_search::server::McpServer;
use clinic_search::tools::register_all_tools;
use clinic_search::types::McpResult;

fn main() -> McpResult<()> {
    // Logs go to stderr so stdout stays free for the stdio transport.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let directory = Arc::new(Directory::load_lenient(&config.data_dir));

    // Built outside any async runtime: the AI client is blocking.
    let augmenter = augment::from_config(config.ai.as_ref())?;

    if std::env::args().any(|arg| arg == "--stdio") {
        let mut server = McpServer::new();
        register_all_tools(&mut server, directory, augmenter);
        return server.run_stdio();
    }

    let state = Arc::new(AppState::new(
        directory,
        augmenter.clone(),
        config.cors_origin.clone(),
    ));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(api::serve(config.http_addr, state))?;
    drop(runtime);

    // Last handle to the blocking client is released outside the runtime.
    drop(augmenter);
    Ok(())
}

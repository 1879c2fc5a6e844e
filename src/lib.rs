//! Clinic Search
//!
//! Medical directory search: ranks clinic doctors and health articles
//! against a free-text query, and serves the ranking over HTTP and the
//! Model Context Protocol (MCP).
//!
//! # Features
//!
//! - **Synonym expansion**: fixed medical vocabulary ("heart" → "cardiac", ...)
//! - **Typo tolerance**: Levenshtein matching within two edits
//! - **Additive scoring**: exact, per-term, fuzzy, title and field signals
//! - **Suggestions**: "did you mean" terms from the directory vocabulary
//! - **AI augmentation**: optional web search results returned alongside
//!
//! # Modules
//!
//! - `search`: Query expansion, fuzzy matching, scoring and ranking
//! - `types`: Directory records and ranked results
//! - `directory`: Loading the doctor and article datasets
//! - `augment`: Optional AI web-search augmentation
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `server`: MCP dispatcher and stdio transport
//! - `tools`: MCP tool implementations
//! - `api`: HTTP endpoints
//! - `config`: Environment configuration
//!
//! # Example
//!
//! ```
//! use clinic_search::search::{search, NoJitter};
//! use clinic_search::types::{Article, Doctor};
//!
//! let doctors = vec![Doctor::new("Dr. Minh", "Cardiology", "Heart Failure")];
//! let articles: Vec<Article> = Vec::new();
//!
//! let results = search("heart", &doctors, &articles, &mut NoJitter);
//! assert_eq!(results[0].title, "Dr. Minh");
//! ```

pub mod api;
pub mod augment;
pub mod config;
pub mod directory;
pub mod protocol;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;

// Re-export commonly used items at crate root
pub use config::Config;
pub use directory::Directory;
pub use search::{expand_query, fuzzy_match, levenshtein, search, suggestions_for};
pub use server::McpServer;
pub use types::{Article, Doctor, McpResult, MatchType, ScoredResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

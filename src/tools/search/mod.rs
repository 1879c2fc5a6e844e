mod ai_search;
mod suggestions;

pub use ai_search::{AiSearchPayload, AiSearchTool, ResultCount};
pub use suggestions::SuggestionsTool;

//! Article records

use serde::{Deserialize, Serialize};

/// Number of content characters kept in a result excerpt
pub const EXCERPT_CHARS: usize = 120;

/// A health article published by the clinic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Create a new article without tags
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    /// Create a new article with tags
    pub fn with_tags(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags,
        }
    }

    /// Lowercased text the ranker matches against
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.content, self.tags.join(" ")).to_lowercase()
    }

    /// First characters of the content followed by an ellipsis
    pub fn excerpt(&self) -> String {
        let mut excerpt: String = self.content.chars().take(EXCERPT_CHARS).collect();
        excerpt.push_str("...");
        excerpt
    }
}

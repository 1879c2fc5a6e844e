//! Ranked search results

use serde::{Deserialize, Serialize};

/// How strongly a result matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Strong,
    Partial,
}

/// Record-specific fields of a result, tagged by record kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultDetail {
    Doctor {
        department: String,
        specialization: String,
    },
    Article {
        excerpt: String,
        content: String,
        tags: Vec<String>,
    },
}

/// A single ranked match produced by one search call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub title: String,
    #[serde(flatten)]
    pub detail: ResultDetail,
    /// Published score, jitter included
    pub score: f64,
    #[serde(rename = "matchType")]
    pub match_type: MatchType,
    /// Score before jitter was applied
    #[serde(skip)]
    pub raw_score: f64,
}

impl ScoredResult {
    pub fn is_doctor(&self) -> bool {
        matches!(self.detail, ResultDetail::Doctor { .. })
    }

    pub fn is_article(&self) -> bool {
        matches!(self.detail, ResultDetail::Article { .. })
    }
}

//! Lexical search over the clinic directory
//!
//! This module provides:
//! - Synonym expansion of free-text queries
//! - Levenshtein-based fuzzy matching
//! - Additive relevance scoring and ranking of doctors and articles
//! - Spelling suggestions from the directory vocabulary

mod fuzzy;
mod ranker;
mod scoring;
mod suggest;
mod synonyms;

pub use fuzzy::{fuzzy_match, has_nearby_word, levenshtein, within_distance, DEFAULT_MAX_DISTANCE};
pub use ranker::{search, Jitter, NoJitter, UniformJitter, MAX_JITTER};
pub use scoring::{classify, score, score_article, score_doctor, MIN_SCORE, STRONG_SCORE};
pub use suggest::{suggestions_for, MAX_SUGGESTIONS};
pub use synonyms::{expand_query, synonyms_for, QueryTermSet, MEDICAL_SYNONYMS};

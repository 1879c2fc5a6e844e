//! Spelling suggestions drawn from the directory vocabulary

use std::collections::HashSet;

use super::fuzzy::levenshtein;
use crate::types::{Article, Doctor};

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 5;
/// Maximum edit distance between a query term and a suggestion
pub const SUGGESTION_DISTANCE: usize = 2;

const MIN_VOCABULARY_CHARS: usize = 4;
const MIN_QUERY_TERM_CHARS: usize = 3;

/// Vocabulary words close to, but not identical with, the query's terms
///
/// Suggestions are returned in the order they were first found.
pub fn suggestions_for(query: &str, doctors: &[Doctor], articles: &[Article]) -> Vec<String> {
    let vocabulary = collect_vocabulary(doctors, articles);
    let lowered = query.to_lowercase();

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for term in lowered.split_whitespace() {
        if term.chars().count() < MIN_QUERY_TERM_CHARS {
            continue;
        }
        for word in &vocabulary {
            let distance = levenshtein(term, word);
            if distance > 0 && distance <= SUGGESTION_DISTANCE && seen.insert(word.as_str()) {
                suggestions.push(word.clone());
                if suggestions.len() == MAX_SUGGESTIONS {
                    return suggestions;
                }
            }
        }
    }

    suggestions
}

/// Distinct words (longer than three characters) from the fields worth suggesting
fn collect_vocabulary(doctors: &[Doctor], articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();

    let doctor_fields = doctors
        .iter()
        .map(|d| format!("{} {}", d.department, d.specialization));
    let article_fields = articles
        .iter()
        .map(|a| format!("{} {}", a.title, a.tags.join(" ")));

    for text in doctor_fields.chain(article_fields) {
        for word in text.to_lowercase().split_whitespace() {
            if word.chars().count() >= MIN_VOCABULARY_CHARS && seen.insert(word.to_string()) {
                vocabulary.push(word.to_string());
            }
        }
    }

    vocabulary
}

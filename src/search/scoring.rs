//! Additive relevance scoring
//!
//! Every signal contributes a whole number of tenths, so sums and threshold
//! comparisons are exact.
//!
//! A record is scored term by term. Each expanded term the record text
//! fuzzy-matches contributes its own [`score`], capped at [`MAX_POINTS`],
//! and the record total is capped again after the record-level bonuses.

use super::fuzzy::{fuzzy_match, has_nearby_word, DEFAULT_MAX_DISTANCE};
use super::synonyms::QueryTermSet;
use crate::types::{Article, Doctor, MatchType};

/// Term being scored appears verbatim in the record text
pub const EXACT_TERM_POINTS: u32 = 5;
/// Any expanded term appears verbatim in the record text
pub const TERM_SUBSTRING_POINTS: u32 = 3;
/// Some word of the record text is within edit distance of an expanded term
pub const TERM_FUZZY_POINTS: u32 = 1;
/// Matched term appears verbatim in an article title
pub const TITLE_TERM_POINTS: u32 = 2;
/// Full query fuzzy-matches a doctor's department or specialization
pub const FIELD_QUERY_POINTS: u32 = 4;

pub const MAX_POINTS: u32 = 10;
const POINTS_PER_UNIT: f64 = 10.0;

/// Records must score strictly above this to be returned
pub const MIN_SCORE: f64 = 0.1;
/// Records scoring strictly above this are strong matches
pub const STRONG_SCORE: f64 = 0.5;

/// Contribution of one matched `term` to the relevance of `text`, clamped to [0, 1]
///
/// `terms` is the whole expanded set: every member found in `text` adds to
/// the contribution, not only `term`. Arguments must already be lowercased.
pub fn score(text: &str, term: &str, terms: &QueryTermSet) -> f64 {
    to_score(term_points(text, term, coverage_points(text, terms)))
}

/// Raw (pre-jitter) relevance of a doctor record
pub fn score_doctor(doctor: &Doctor, query: &str, terms: &QueryTermSet) -> f64 {
    let text = doctor.search_text();
    let coverage = coverage_points(&text, terms);

    let mut points: u32 = matched_terms(&text, terms)
        .map(|term| term_points(&text, term, coverage))
        .sum();

    let department = doctor.department.to_lowercase();
    let specialization = doctor.specialization.to_lowercase();
    if fuzzy_match(&department, query, DEFAULT_MAX_DISTANCE)
        || fuzzy_match(&specialization, query, DEFAULT_MAX_DISTANCE)
    {
        points += FIELD_QUERY_POINTS;
    }

    to_score(points)
}

/// Raw (pre-jitter) relevance of an article record
pub fn score_article(article: &Article, terms: &QueryTermSet) -> f64 {
    let text = article.search_text();
    let coverage = coverage_points(&text, terms);
    let title = article.title.to_lowercase();

    let points: u32 = matched_terms(&text, terms)
        .map(|term| {
            let title_bonus = if title.contains(term) { TITLE_TERM_POINTS } else { 0 };
            term_points(&text, term, coverage) + title_bonus
        })
        .sum();

    to_score(points)
}

/// Whether a raw score is returned at all, and how strongly it matched
pub fn classify(raw_score: f64) -> Option<MatchType> {
    if raw_score <= MIN_SCORE {
        return None;
    }
    if raw_score > STRONG_SCORE {
        Some(MatchType::Strong)
    } else {
        Some(MatchType::Partial)
    }
}

fn matched_terms<'a>(text: &'a str, terms: &'a QueryTermSet) -> impl Iterator<Item = &'a str> {
    terms
        .iter()
        .filter(move |term| fuzzy_match(text, term, DEFAULT_MAX_DISTANCE))
}

fn term_points(text: &str, term: &str, coverage: u32) -> u32 {
    let exact = if text.contains(term) { EXACT_TERM_POINTS } else { 0 };
    (exact + coverage).min(MAX_POINTS)
}

/// Points earned by the whole term set against `text`, shared by every matched term
fn coverage_points(text: &str, terms: &QueryTermSet) -> u32 {
    terms
        .iter()
        .map(|term| {
            let mut points = 0;
            if text.contains(term) {
                points += TERM_SUBSTRING_POINTS;
            }
            // Fires independently of the substring bonus.
            if has_nearby_word(text, term, DEFAULT_MAX_DISTANCE) {
                points += TERM_FUZZY_POINTS;
            }
            points
        })
        .sum()
}

fn to_score(points: u32) -> f64 {
    f64::from(points.min(MAX_POINTS)) / POINTS_PER_UNIT
}

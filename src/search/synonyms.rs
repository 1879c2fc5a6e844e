//! Medical synonym dictionary and query expansion

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Canonical term → related terms
pub const MEDICAL_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "heart",
        &["cardiac", "cardiovascular", "cardio", "heart disease", "heart attack"],
    ),
    (
        "brain",
        &["neurological", "neuro", "cerebral", "mental", "cognitive"],
    ),
    ("child", &["pediatric", "kids", "children", "baby", "infant"]),
    ("skin", &["dermatology", "dermal", "cutaneous", "rash", "acne"]),
    ("bone", &["orthopedic", "skeletal", "fracture", "joint"]),
    ("cancer", &["oncology", "tumor", "malignant", "chemotherapy"]),
    ("diabetes", &["blood sugar", "insulin", "diabetic"]),
    ("pain", &["ache", "discomfort", "sore", "hurt"]),
    ("surgery", &["operation", "procedure", "surgical"]),
    (
        "medicine",
        &["drug", "medication", "prescription", "treatment"],
    ),
];

static SYNONYM_TABLE: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| MEDICAL_SYNONYMS.iter().copied().collect());

/// Related terms for an exact, lowercase canonical term
pub fn synonyms_for(term: &str) -> Option<&'static [&'static str]> {
    SYNONYM_TABLE.get(term).copied()
}

/// Deduplicated lowercase search terms derived from one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTermSet {
    terms: BTreeSet<String>,
}

impl QueryTermSet {
    /// Create an empty term set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term, returning false if it was already present
    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.terms.insert(term.into())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Terms in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for QueryTermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Expand a raw query into its terms plus the synonyms of every known term
pub fn expand_query(query: &str) -> QueryTermSet {
    let lowered = query.to_lowercase();
    let mut expanded = QueryTermSet::new();

    for term in lowered.split_whitespace() {
        if let Some(synonyms) = synonyms_for(term) {
            for &synonym in synonyms {
                expanded.insert(synonym);
            }
        }
        expanded.insert(term);
    }

    expanded
}

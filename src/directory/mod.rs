//! Directory - the doctor and article datasets
//!
//! Datasets are JSON arrays read once from a data directory and then shared
//! read-only by every search.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

use crate::search::{search, suggestions_for, Jitter};
use crate::types::{Article, Doctor, ScoredResult};

/// File holding the doctor records
pub const DOCTORS_FILE: &str = "doctors.json";
/// File holding the article records
pub const ARTICLES_FILE: &str = "articles.json";

/// Failure to load a dataset file
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The searchable clinic directory
#[derive(Debug, Clone, Default)]
pub struct Directory {
    doctors: Vec<Doctor>,
    articles: Vec<Article>,
}

impl Directory {
    /// Create a directory from records already in memory
    pub fn new(doctors: Vec<Doctor>, articles: Vec<Article>) -> Self {
        Self { doctors, articles }
    }

    /// Load both datasets from `dir`, failing on the first unreadable file
    pub fn load(dir: &Path) -> Result<Self, DirectoryError> {
        let doctors = load_records(&dir.join(DOCTORS_FILE))?;
        let articles = load_records(&dir.join(ARTICLES_FILE))?;
        let directory = Self::new(doctors, articles);
        directory.log_loaded(dir);
        Ok(directory)
    }

    /// Load both datasets from `dir`, treating any unreadable file as empty
    pub fn load_lenient(dir: &Path) -> Self {
        let doctors = load_records(&dir.join(DOCTORS_FILE)).unwrap_or_else(|e| {
            error!(error = %e, "doctor dataset unavailable");
            Vec::new()
        });
        let articles = load_records(&dir.join(ARTICLES_FILE)).unwrap_or_else(|e| {
            error!(error = %e, "article dataset unavailable");
            Vec::new()
        });
        let directory = Self::new(doctors, articles);
        directory.log_loaded(dir);
        directory
    }

    /// Doctor records in file order
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Article records in file order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Check if both datasets are empty
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty() && self.articles.is_empty()
    }

    /// Rank the directory against a query
    pub fn search<J: Jitter + ?Sized>(&self, query: &str, jitter: &mut J) -> Vec<ScoredResult> {
        search(query, &self.doctors, &self.articles, jitter)
    }

    /// Spelling suggestions for a query
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        suggestions_for(query, &self.doctors, &self.articles)
    }

    fn log_loaded(&self, dir: &Path) {
        info!(
            dir = %dir.display(),
            doctors = self.doctors.len(),
            articles = self.articles.len(),
            "directory loaded"
        );
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DirectoryError> {
    let content = fs::read_to_string(path).map_err(|source| DirectoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DirectoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

//! Doctor records

use serde::{Deserialize, Serialize};

/// A doctor listed in the clinic directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub department: String,
    pub specialization: String,
}

impl Doctor {
    /// Create a new doctor record
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            specialization: specialization.into(),
        }
    }

    /// Lowercased text the ranker matches against
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.department, self.specialization).to_lowercase()
    }
}

use serde::{Deserialize, Serialize};

/// An academic degree offering in the catalog. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Stable slug, unique across the catalog.
    pub key: String,
    pub name: String,
    pub college: String,
    pub description: String,
    pub careers: Vec<String>,
    pub icon: String,
    pub url: String,
    /// Tags that quiz answers are matched against.
    pub keywords: Vec<String>,
    pub degree_type: String,
}

impl Program {
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

/// One of the six broad interest buckets used by the letter-count variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub letter: char,
    pub name: String,
    /// Names of the programs grouped under this field.
    pub programs: Vec<String>,
    pub icon: String,
    pub college: String,
}

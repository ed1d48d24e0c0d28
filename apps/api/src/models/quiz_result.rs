use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated quiz submission, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuizResult {
    pub session_id: String,
    /// Stored as submitted.
    pub answers: Value,
    pub top_matches: Vec<String>,
    pub scores: BTreeMap<String, f64>,
    pub created_at: String,
}

/// A persisted quiz submission. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: i64,
    pub session_id: String,
    pub answers: Value,
    pub top_matches: Vec<String>,
    pub scores: BTreeMap<String, f64>,
    pub created_at: String,
}

impl QuizResult {
    pub fn from_new(id: i64, new: NewQuizResult) -> Self {
        Self {
            id,
            session_id: new.session_id,
            answers: new.answers,
            top_matches: new.top_matches,
            scores: new.scores,
            created_at: new.created_at,
        }
    }
}

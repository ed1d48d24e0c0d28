//! Matching engine: pluggable strategies that rank quiz answers.
//!
//! `KeywordStrategy` (default): weighted keyword overlap against the program
//! catalog, min-max normalized with a 10% floor.
//! `CategoryStrategy`: letter counting over six fixed categories.
//!
//! `AppState` holds an `Arc<dyn MatchStrategy>`, chosen at startup via config.

pub mod category;
pub mod keyword;
mod reasons;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryCatalog, ProgramCatalog};
use crate::config::StrategyKind;
use crate::models::program::{Category, Program};
use crate::models::quiz::{Answer, Question};

pub use category::CategoryStrategy;
pub use keyword::KeywordStrategy;

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across strategies)
// ────────────────────────────────────────────────────────────────────────────

/// What a match points at: a catalog program or a letter category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchTarget {
    Program(Program),
    Category { category: Category, count: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub target: MatchTarget,
    /// Raw accumulated score; ranking is by this value.
    pub score: f64,
    /// Display percentage, relative to this run only.
    pub match_percentage: u32,
    pub reasons: Vec<String>,
}

impl MatchResult {
    /// Program key or category letter, as stored in result summaries.
    pub fn key(&self) -> String {
        match &self.target {
            MatchTarget::Program(program) => program.key.clone(),
            MatchTarget::Category { category, .. } => category.letter.to_string(),
        }
    }
}

/// Top three keys plus the full key → score map, for persisting a run.
pub fn summarize(results: &[MatchResult]) -> (Vec<String>, BTreeMap<String, f64>) {
    let top_matches = results.iter().take(3).map(MatchResult::key).collect();
    let scores = results.iter().map(|r| (r.key(), r.score)).collect();
    (top_matches, scores)
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A matching strategy. Implement this to swap algorithms without touching
/// the handlers.
///
/// `rank` is pure and total: it never fails and holds no state between calls.
/// Answers must already be aligned with `questions()` by position.
pub trait MatchStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn questions(&self) -> &[Question];

    fn rank(&self, answers: &[Answer]) -> Vec<MatchResult>;
}

pub fn build_strategy(
    kind: StrategyKind,
    programs: &ProgramCatalog,
    categories: &CategoryCatalog,
) -> Arc<dyn MatchStrategy> {
    match kind {
        StrategyKind::Keyword => Arc::new(KeywordStrategy::new(programs.clone())),
        StrategyKind::Category => Arc::new(CategoryStrategy::new(categories.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_strategy_by_kind() {
        let programs = ProgramCatalog::seeded();
        let categories = CategoryCatalog::seeded();

        let keyword = build_strategy(StrategyKind::Keyword, &programs, &categories);
        assert_eq!(keyword.name(), "keyword");
        assert_eq!(keyword.questions().len(), 10);

        let category = build_strategy(StrategyKind::Category, &programs, &categories);
        assert_eq!(category.name(), "category");
        assert_eq!(category.questions().len(), 15);
    }

    #[test]
    fn test_summarize_takes_top_three_and_all_scores() {
        let strategy = CategoryStrategy::new(CategoryCatalog::seeded());
        let answers: Vec<Answer> = ["C", "C", "A", "E", "C", "A"]
            .iter()
            .zip(1u32..)
            .map(|(letter, id)| Answer::MultipleChoice {
                question_id: id,
                value: letter.to_string(),
                weight: None,
            })
            .collect();

        let (top, scores) = summarize(&strategy.rank(&answers));
        assert_eq!(top, vec!["C", "A", "E"]);
        assert_eq!(scores.len(), 6);
        assert_eq!(scores["C"], 3.0);
        assert_eq!(scores["F"], 0.0);
    }

    #[test]
    fn test_match_target_wire_shape() {
        let program = ProgramCatalog::seeded().get("law").unwrap().clone();
        let result = MatchResult {
            target: MatchTarget::Program(program),
            score: 6.0,
            match_percentage: 100,
            reasons: vec![],
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["target"]["kind"], "program");
        assert_eq!(v["target"]["key"], "law");
        assert_eq!(result.key(), "law");
    }
}

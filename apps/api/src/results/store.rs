//! Result store: append-only log of completed quiz runs, looked up by session id.
//!
//! `InMemoryResultStore` is the default. `PgResultStore` is used when
//! `DATABASE_URL` is set. `AppState` holds an `Arc<dyn ResultStore>`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::models::quiz_result::{NewQuizResult, QuizResult};

#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Appends a record; the backend assigns its id.
    async fn save(&self, result: NewQuizResult) -> Result<QuizResult, AppError>;

    /// Session ids are not unique: returns the first record saved with `session_id`.
    async fn find_by_session(&self, session_id: &str) -> Result<Option<QuizResult>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

struct ResultLog {
    next_id: i64,
    records: Vec<QuizResult>,
}

pub struct InMemoryResultStore {
    log: RwLock<ResultLog>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(ResultLog {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save(&self, result: NewQuizResult) -> Result<QuizResult, AppError> {
        let mut log = self.log.write().await;
        let id = log.next_id;
        log.next_id += 1;

        let saved = QuizResult::from_new(id, result);
        log.records.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<QuizResult>, AppError> {
        let log = self.log.read().await;
        Ok(log
            .records
            .iter()
            .find(|r| r.session_id == session_id)
            .cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, FromRow)]
struct QuizResultRow {
    id: i64,
    session_id: String,
    answers: Value,
    top_matches: Vec<String>,
    scores: Json<BTreeMap<String, f64>>,
    created_at: String,
}

impl From<QuizResultRow> for QuizResult {
    fn from(row: QuizResultRow) -> Self {
        QuizResult {
            id: row.id,
            session_id: row.session_id,
            answers: row.answers,
            top_matches: row.top_matches,
            scores: row.scores.0,
            created_at: row.created_at,
        }
    }
}

pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `quiz_results` table and its session index if missing.
    /// The index is not unique: duplicate session ids are kept.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quiz_results (
                id          BIGSERIAL PRIMARY KEY,
                session_id  TEXT NOT NULL,
                answers     JSONB NOT NULL,
                top_matches TEXT[] NOT NULL,
                scores      JSONB NOT NULL,
                created_at  TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS quiz_results_session_id_idx ON quiz_results (session_id)",
        )
        .execute(&self.pool)
        .await?;

        info!("quiz_results schema ready");
        Ok(())
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn save(&self, result: NewQuizResult) -> Result<QuizResult, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO quiz_results (session_id, answers, top_matches, scores, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&result.session_id)
        .bind(&result.answers)
        .bind(&result.top_matches)
        .bind(Json(&result.scores))
        .bind(&result.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(QuizResult::from_new(id, result))
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<QuizResult>, AppError> {
        let row: Option<QuizResultRow> = sqlx::query_as(
            "SELECT * FROM quiz_results WHERE session_id = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuizResult::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(session_id: &str, top: &str) -> NewQuizResult {
        NewQuizResult {
            session_id: session_id.to_string(),
            answers: json!([{"question_id": 1, "value": "A"}]),
            top_matches: vec![top.to_string()],
            scores: BTreeMap::from([(top.to_string(), 1.0)]),
            created_at: "2026-10-15T09:30:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let store = InMemoryResultStore::new();
        let first = store.save(record("s1", "A")).await.unwrap();
        let second = store.save(record("s2", "B")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_round_trip_keeps_fields() {
        let store = InMemoryResultStore::new();
        let new = record("abc123", "law");
        store.save(new.clone()).await.unwrap();

        let found = store.find_by_session("abc123").await.unwrap().unwrap();
        assert_eq!(found.answers, new.answers);
        assert_eq!(found.top_matches, new.top_matches);
        assert_eq!(found.scores, new.scores);
    }

    #[tokio::test]
    async fn test_duplicate_session_returns_first_saved() {
        let store = InMemoryResultStore::new();
        store.save(record("dup", "first")).await.unwrap();
        store.save(record("dup", "second")).await.unwrap();

        let found = store.find_by_session("dup").await.unwrap().unwrap();
        assert_eq!(found.top_matches, vec!["first"]);
    }

    #[tokio::test]
    async fn test_missing_session_is_none() {
        let store = InMemoryResultStore::new();
        assert!(store.find_by_session("nope").await.unwrap().is_none());
    }
}

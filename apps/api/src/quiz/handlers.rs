//! Axum route handlers for the quiz itself.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::{summarize, MatchResult};
use crate::models::quiz::{Answer, Question};
use crate::models::quiz_result::NewQuizResult;
use crate::quiz::answers::AnswerSheet;
use crate::results::session::{generate_session_id, persist_in_background};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub strategy: &'static str,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub session_id: String,
    pub strategy: &'static str,
    pub matches: Vec<MatchResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/quiz/questions
///
/// Returns the question bank of the active strategy, in answer order.
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        strategy: state.strategy.name(),
        questions: state.strategy.questions().to_vec(),
    })
}

/// POST /api/quiz/matches
///
/// Ranks a completed quiz run. The summary is saved in the background: the
/// response neither waits for nor reports the outcome of that save.
pub async fn handle_compute_matches(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let strategy = state.strategy.as_ref();
    let answers = AnswerSheet::from_answers(request.answers)
        .align(strategy.questions())
        .map_err(|errors| AppError::invalid_payload("Invalid quiz answers", errors))?;

    let matches = strategy.rank(&answers);
    let session_id = generate_session_id();

    let (top_matches, scores) = summarize(&matches);
    info!(
        session_id = %session_id,
        strategy = strategy.name(),
        top = ?top_matches,
        "Quiz run ranked"
    );

    let record = NewQuizResult {
        session_id: session_id.clone(),
        answers: serde_json::to_value(&answers).map_err(anyhow::Error::from)?,
        top_matches,
        scores,
        created_at: Utc::now().to_rfc3339(),
    };
    persist_in_background(state.results.clone(), record);

    Ok(Json(MatchResponse {
        session_id,
        strategy: strategy.name(),
        matches,
    }))
}

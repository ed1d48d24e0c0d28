//! Axum route handlers for quiz-result submission and lookup.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::quiz_result::QuizResult;
use crate::results::validation::validate_submission;
use crate::state::AppState;

/// POST /api/quiz-results
pub async fn handle_create_result(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<QuizResult>), AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let new_result = validate_submission(&body)
        .map_err(|errors| AppError::invalid_payload("Invalid quiz result data", errors))?;

    let saved = state.results.save(new_result).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// GET /api/quiz-results/:session_id
pub async fn handle_get_result(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<QuizResult>, AppError> {
    state
        .results
        .find_by_session(&session_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Quiz results not found".to_string()))
}

//! Axum route handlers for the program catalog.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::program::Program;
use crate::state::AppState;

/// GET /api/majors
pub async fn handle_list_majors(State(state): State<AppState>) -> Json<Vec<Program>> {
    Json(state.catalog.all().to_vec())
}

/// GET /api/majors/:key
pub async fn handle_get_major(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Program>, AppError> {
    state
        .catalog
        .get(&key)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Major not found".to_string()))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::quiz::handlers as quiz;
use crate::results::handlers as results;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Program catalog
        .route("/api/majors", get(catalog::handle_list_majors))
        .route("/api/majors/:key", get(catalog::handle_get_major))
        // Quiz
        .route("/api/quiz/questions", get(quiz::handle_get_questions))
        .route("/api/quiz/matches", post(quiz::handle_compute_matches))
        // Result store
        .route("/api/quiz-results", post(results::handle_create_result))
        .route(
            "/api/quiz-results/:session_id",
            get(results::handle_get_result),
        )
        .with_state(state)
}

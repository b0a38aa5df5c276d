pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quiz::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/professions", get(handlers::handle_list_professions))
        .route("/api/quiz/:profession_id", get(handlers::handle_quiz))
        .route(
            "/api/question/:profession_id",
            get(handlers::handle_get_question),
        )
        .route("/api/check-answer", post(handlers::handle_check_answer))
        .route("/api/score", get(handlers::handle_get_score))
        .with_state(state)
}

pub mod form;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form surface
        .route(
            "/",
            get(form::handle_form_page).post(form::handle_form_submit),
        )
        // JSON API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/batch", post(handlers::handle_analyze_batch))
        .with_state(state)
}

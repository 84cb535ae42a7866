pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::extraction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route("/api/v1/skills/extract", post(handlers::handle_extract))
        .route("/api/v1/skills/resolve", post(handlers::handle_resolve))
        // Dictionary API
        .route(
            "/api/v1/dictionary",
            get(handlers::handle_list_dictionary).post(handlers::handle_extend_dictionary),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendations::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form flow
        .route("/", get(handlers::handle_form_page))
        .route("/recommendations", post(handlers::handle_form_submit))
        // JSON API
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_api_recommendations),
        )
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{any, get},
    Router,
};

use crate::advice::handlers;
use crate::state::AppState;

pub const GREETING: &str = "Hello World!";

/// Default response for unmatched paths and `/recommendations` without a `url`.
pub async fn greeting() -> &'static str {
    GREETING
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/review", any(handlers::handle_review))
        .route("/recommendations", any(handlers::handle_recommendations))
        .fallback(greeting)
        .with_state(state)
}

//! API route definitions

use axum::{routing::get, Router};

use super::handlers;
use super::AppState;

/// Create all API routes
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/tokens", get(handlers::get_tokens))
        .route("/api/tokens/:address", get(handlers::get_token))
        .route("/api/demo", get(handlers::get_demo_tokens))
        .with_state(state)
}

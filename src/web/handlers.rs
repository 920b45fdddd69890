//! Request handlers for all API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::error;

use super::models::{ErrorResponse, HealthResponse};
use super::AppState;
use crate::demo;
use crate::error::MemewatchError;
use crate::models::token::CanonicalToken;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// The full scored token list. In demo mode this serves synthetic
/// tokens instead of hitting Dexscreener.
pub async fn get_tokens(
    State(state): State<AppState>,
) -> Result<Json<Vec<CanonicalToken>>, (StatusCode, Json<ErrorResponse>)> {
    if state.config.demo_mode {
        return Ok(Json(demo::demo_tokens(&mut rand::thread_rng())));
    }

    match state.fetcher.fetch_all_tokens().await {
        Ok(tokens) => Ok(Json(tokens)),
        Err(e) => {
            error!("Token fetch failed: {:?}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to fetch tokens from Dexscreener".to_string(),
                    details: Some(e.to_string()),
                }),
            ))
        }
    }
}

pub async fn get_token(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<CanonicalToken>, (StatusCode, Json<ErrorResponse>)> {
    match state.fetcher.fetch_token_by_address(&address).await {
        Ok(Some(token)) => Ok(Json(token)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: MemewatchError::TokenNotFound(address).to_string(),
                details: None,
            }),
        )),
        Err(e) => {
            error!("Token lookup failed for {}: {:?}", address, e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to fetch tokens from Dexscreener".to_string(),
                    details: Some(e.to_string()),
                }),
            ))
        }
    }
}

pub async fn get_demo_tokens() -> Json<Vec<CanonicalToken>> {
    Json(demo::demo_tokens(&mut rand::thread_rng()))
}

//! Web API module
//!
//! REST surface the dashboard frontend talks to: token list, single
//! token lookup, demo data and a health check.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use std::sync::Arc;

use crate::config::Config;
use crate::fetcher::TokenFetcher;

/// Shared application state for all API handlers
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<TokenFetcher>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(fetcher: Arc<TokenFetcher>, config: Arc<Config>) -> Self {
        Self { fetcher, config }
    }
}

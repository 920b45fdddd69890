use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod api;
mod config;
mod demo;
mod error;
mod fetcher;
mod models;
mod scoring;
mod web;

use crate::api::dexscreener::DexscreenerClient;
use crate::config::Config;
use crate::fetcher::TokenFetcher;
use crate::web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let config = Arc::new(Config::load()?);
    info!("Configuration loaded successfully");
    if config.demo_mode {
        info!("Demo mode enabled, /api/tokens will serve synthetic data");
    }

    let client = Arc::new(DexscreenerClient::with_base_url(
        &config.dexscreener_base_url,
    ));
    let fetcher = Arc::new(TokenFetcher::new(client));
    info!("Dexscreener client initialized");

    let state = AppState::new(fetcher, config.clone());
    web::server::start_server(state, config).await
}

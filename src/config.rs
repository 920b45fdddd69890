use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

use crate::api::dexscreener::DEXSCREENER_BASE_URL;
use crate::error::MemewatchError;

/// Port the dashboard frontend expects the API on.
pub const DEFAULT_PORT: u16 = 6608;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub demo_mode: bool,
    pub dexscreener_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| MemewatchError::ConfigError("PORT must be a number".to_string()))?,
            demo_mode: env::var("DEMO_MODE")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            dexscreener_base_url: env::var("DEXSCREENER_BASE_URL")
                .unwrap_or_else(|_| DEXSCREENER_BASE_URL.to_string()),
        })
    }
}

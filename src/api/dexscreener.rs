//! Dexscreener API Client
//!
//! Provides access to the two public Dexscreener endpoints the dashboard
//! consumes:
//! - /token-profiles/latest/v1 - latest token profiles across all chains
//! - /latest/dex/tokens/{address} - trading pairs for a single token
//!
//! Both payloads are loosely shaped; every field the API may omit is an
//! Option so missing data never fails deserialization.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::MemewatchError;

pub const DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com";

/// Chain tag used by Dexscreener for Solana tokens.
pub const SOLANA_CHAIN_ID: &str = "solana";

// ============================================================================
// Response Structures
// ============================================================================

/// A token profile from the /token-profiles endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProfile {
    pub token_address: String,
    #[serde(default)]
    pub chain_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<TokenLink>>,
}

/// A social/trading link attached to a token profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenLink {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub link_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response wrapper for the per-token pair lookup.
#[derive(Debug, Deserialize)]
struct PairsResponse {
    #[serde(default)]
    pairs: Option<Vec<TradingPair>>,
}

/// A trading pair for a token on a specific venue.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub liquidity: Option<PairLiquidity>,
    #[serde(default)]
    pub volume: Option<PairVolume>,
    #[serde(default)]
    pub price_change: Option<PairPriceChange>,
    #[serde(default)]
    pub fdv: Option<f64>,
    #[serde(default)]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub dex_id: Option<String>,
    /// Pair creation time as a millisecond epoch.
    #[serde(default)]
    pub create_at: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairLiquidity {
    #[serde(default)]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairVolume {
    #[serde(default)]
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PairPriceChange {
    #[serde(default)]
    pub h24: Option<f64>,
}

impl TradingPair {
    /// Price in USD, 0 when absent or unparsable.
    pub fn price_usd_f64(&self) -> f64 {
        self.price_usd
            .as_ref()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Liquidity in USD, 0 when absent.
    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0)
    }

    /// 24h volume in USD, 0 when absent.
    pub fn volume_h24(&self) -> f64 {
        self.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0)
    }

    /// 24h price change percent, 0 when absent.
    pub fn price_change_h24(&self) -> f64 {
        self.price_change.as_ref().and_then(|p| p.h24).unwrap_or(0.0)
    }
}

// ============================================================================
// Dexscreener Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct DexscreenerClient {
    base_url: String,
    client: Client,
}

impl DexscreenerClient {
    pub fn new() -> Self {
        Self::with_base_url(DEXSCREENER_BASE_URL)
    }

    /// Create a client against an alternate base URL (used by tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .expect("Failed to create HTTP client for Dexscreener"),
        }
    }

    /// Fetch the latest token profiles across every chain Dexscreener tracks.
    pub async fn get_token_profiles(&self) -> Result<Vec<TokenProfile>> {
        let url = format!("{}/token-profiles/latest/v1", self.base_url);
        debug!("Fetching token profiles from Dexscreener: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to Dexscreener profiles endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MemewatchError::ApiError(format!(
                "Dexscreener profiles API error: {} - {}",
                status, error_text
            ))
            .into());
        }

        let profiles: Vec<TokenProfile> = response
            .json()
            .await
            .context("Failed to parse Dexscreener profiles response")?;

        info!("Got {} token profiles from Dexscreener", profiles.len());
        Ok(profiles)
    }

    /// Fetch all trading pairs known for a token address.
    pub async fn get_token_pairs(&self, token_address: &str) -> Result<Vec<TradingPair>> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, token_address);
        debug!("Fetching pairs from Dexscreener: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to Dexscreener pairs endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(MemewatchError::ApiError(format!(
                "Dexscreener pairs API error for {}: {} - {}",
                token_address, status, error_text
            ))
            .into());
        }

        let response_data: PairsResponse = response
            .json()
            .await
            .context("Failed to parse Dexscreener pairs response")?;

        // The API returns null instead of an empty array for unknown tokens.
        Ok(response_data.pairs.unwrap_or_default())
    }
}

impl Default for DexscreenerClient {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dexscreener::TokenLink;
use crate::scoring::rugpull::RiskAssessment;

/// The canonical display record for one memecoin, merged from a token
/// profile and its best trading pair. Field names serialize in the
/// camelCase shape the dashboard frontend consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalToken {
    pub name: String,
    pub symbol: String,
    pub price_usd: f64,
    pub liquidity: f64,              // USD
    pub volume_24h: f64,             // USD
    pub price_change_24h: f64,       // percent
    pub fdv: f64,                    // USD
    pub pair_address: String,
    pub exchange: String,
    pub created_at: DateTime<Utc>,
    pub mint: String,
    pub address: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    #[serde(rename = "headerURI")]
    pub header_uri: String,
    pub links: Vec<TokenLink>,
    pub website: String,
    pub twitter: String,
    pub is_memecoin: bool,
    pub token_type: String,
    pub is_new: bool,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rugpull_score: Option<RiskAssessment>,
}

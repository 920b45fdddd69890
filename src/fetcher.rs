//! Fetch Orchestrator
//!
//! Drives the Dexscreener pipeline: pull the latest token profiles,
//! keep the Solana ones, look up each token's trading pairs in paced
//! chunks, then normalize and score every surviving item.
//!
//! Pair lookups inside a chunk run concurrently; a fixed delay separates
//! one chunk's dispatch from the next to stay under the API rate limit.
//! The delay does not wait for in-flight requests, so chunks can overlap
//! in flight. A failed pair lookup drops only that token; a failed
//! profile-list call fails the whole fetch so callers can tell "service
//! down" apart from "no tokens".

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::{info, warn};

use crate::api::dexscreener::{DexscreenerClient, TokenProfile, TradingPair, SOLANA_CHAIN_ID};
use crate::models::token::CanonicalToken;
use crate::scoring::{normalizer, rugpull};

const CHUNK_SIZE: usize = 10;
const CHUNK_DELAY_MS: u64 = 1000;

pub struct TokenFetcher {
    client: Arc<DexscreenerClient>,
}

impl TokenFetcher {
    pub fn new(client: Arc<DexscreenerClient>) -> Self {
        Self { client }
    }

    /// Fetch, normalize and score the current list of Solana memecoins.
    pub async fn fetch_all_tokens(&self) -> Result<Vec<CanonicalToken>> {
        let profiles = self
            .client
            .get_token_profiles()
            .await
            .context("Failed to fetch token profiles")?;

        let solana_profiles: Vec<TokenProfile> = profiles
            .into_iter()
            .filter(|p| p.chain_id == SOLANA_CHAIN_ID)
            .collect();
        info!("Processing {} Solana token profiles", solana_profiles.len());

        let total = solana_profiles.len();
        let mut handles = Vec::with_capacity(total);
        let mut dispatched = 0usize;

        for chunk in solana_profiles.chunks(CHUNK_SIZE) {
            for profile in chunk {
                let client = self.client.clone();
                let profile = profile.clone();
                handles.push(tokio::spawn(async move {
                    fetch_pairs_for(client, profile).await
                }));
            }
            dispatched += chunk.len();

            // Pace the API between chunks, not after the last one.
            if dispatched < total {
                tokio::time::sleep(Duration::from_millis(CHUNK_DELAY_MS)).await;
            }
        }

        let fetched = join_all(handles).await;
        let tokens: Vec<CanonicalToken> = fetched
            .into_iter()
            .filter_map(|joined| joined.ok().flatten())
            .map(|(profile, pairs)| {
                let mut token = normalizer::normalize(&profile, &pairs);
                token.rugpull_score = Some(rugpull::score_token(&token));
                token
            })
            .collect();

        info!("Normalized and scored {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Look up a single token by address in the freshly fetched list.
    pub async fn fetch_token_by_address(&self, address: &str) -> Result<Option<CanonicalToken>> {
        let tokens = self.fetch_all_tokens().await?;
        Ok(tokens.into_iter().find(|t| t.address == address))
    }
}

async fn fetch_pairs_for(
    client: Arc<DexscreenerClient>,
    profile: TokenProfile,
) -> Option<(TokenProfile, Vec<TradingPair>)> {
    match client.get_token_pairs(&profile.token_address).await {
        Ok(pairs) => Some((profile, pairs)),
        Err(e) => {
            warn!("Could not fetch pairs for {}: {}", profile.token_address, e);
            None
        }
    }
}

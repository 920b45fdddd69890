//! Token Normalizer
//!
//! Merges a token profile with its best trading pair into one
//! CanonicalToken. Every field the API may omit gets a documented
//! fallback here, so downstream code never sees a hole.

use chrono::{Duration, TimeZone, Utc};

use crate::api::dexscreener::{TokenProfile, TradingPair};
use crate::models::token::CanonicalToken;
use crate::scoring::exchange::determine_exchange;

/// A token counts as "new" for this long after its pair was created.
const NEW_TOKEN_WINDOW_HOURS: i64 = 24;

/// Pair with the highest USD liquidity; ties keep the first-encountered
/// pair. Missing liquidity counts as 0.
pub fn best_pair(pairs: &[TradingPair]) -> Option<&TradingPair> {
    let mut best: Option<&TradingPair> = None;
    for pair in pairs {
        match best {
            Some(current) if pair.liquidity_usd() <= current.liquidity_usd() => {}
            _ => best = Some(pair),
        }
    }
    best
}

/// Build the canonical record for one `{profile, pairs}` item.
pub fn normalize(profile: &TokenProfile, pairs: &[TradingPair]) -> CanonicalToken {
    let best = best_pair(pairs);
    let now = Utc::now();

    // Venue from the profile's links, overridden by the pair's dexId when
    // the pair names one.
    let mut exchange = determine_exchange(profile).to_string();
    if let Some(dex_id) = best.and_then(|p| p.dex_id.as_deref()) {
        exchange = dex_id.to_lowercase();
    }

    let pair_created_at = best
        .and_then(|p| p.create_at)
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single());

    let is_new = match best {
        None => true,
        Some(_) => pair_created_at
            .map(|created| now - created < Duration::hours(NEW_TOKEN_WINDOW_HOURS))
            .unwrap_or(false),
    };

    let links = profile.links.clone().unwrap_or_default();
    let website = links
        .iter()
        .find(|l| l.label.as_deref() == Some("Website"))
        .and_then(|l| l.url.clone())
        .unwrap_or_default();
    let twitter = links
        .iter()
        .find(|l| l.link_type.as_deref() == Some("twitter"))
        .and_then(|l| l.url.clone())
        .unwrap_or_default();

    let name = profile
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| profile.token_address.chars().take(8).collect());

    CanonicalToken {
        name,
        symbol: profile.symbol.clone().unwrap_or_default(),
        price_usd: best.map(TradingPair::price_usd_f64).unwrap_or(0.0),
        liquidity: best.map(TradingPair::liquidity_usd).unwrap_or(0.0),
        volume_24h: best.map(TradingPair::volume_h24).unwrap_or(0.0),
        price_change_24h: best.map(TradingPair::price_change_h24).unwrap_or(0.0),
        fdv: best.and_then(|p| p.fdv).unwrap_or(0.0),
        pair_address: best.and_then(|p| p.pair_address.clone()).unwrap_or_default(),
        exchange,
        created_at: pair_created_at.unwrap_or(now),
        mint: profile.token_address.clone(),
        address: profile.token_address.clone(),
        logo_uri: profile.icon.clone().unwrap_or_default(),
        header_uri: profile.header.clone().unwrap_or_default(),
        links,
        website,
        twitter,
        is_memecoin: true,
        token_type: "memecoin".to_string(),
        is_new,
        description: profile.description.clone().unwrap_or_default(),
        url: best
            .and_then(|p| p.url.clone())
            .or_else(|| profile.url.clone())
            .unwrap_or_default(),
        rugpull_score: None,
    }
}

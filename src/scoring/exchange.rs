//! Exchange Classifier
//!
//! Infers the trading venue for a token from URL substrings. The rules
//! live in one ordered table so the priority is auditable: the profile's
//! own URL sets a default, and the first "trade"-labeled link pointing
//! at a known venue overrides it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::dexscreener::{TokenLink, TokenProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Jupiter,
    Raydium,
    Pumpswap,
    Phoenix,
    Orca,
    Meteora,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Jupiter => "jupiter",
            Exchange::Raydium => "raydium",
            Exchange::Pumpswap => "pumpswap",
            Exchange::Phoenix => "phoenix",
            Exchange::Orca => "orca",
            Exchange::Meteora => "meteora",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain substring rules, checked in priority order. First match wins.
const EXCHANGE_DOMAINS: &[(&str, Exchange)] = &[
    ("raydium.io", Exchange::Raydium),
    ("jup.ag", Exchange::Jupiter),
    ("pumpswap", Exchange::Pumpswap),
    ("phoenix.app", Exchange::Phoenix),
    ("orca.so", Exchange::Orca),
    ("meteora.ag", Exchange::Meteora),
];

/// Best-guess venue for a token profile. Defaults to Jupiter.
pub fn determine_exchange(profile: &TokenProfile) -> Exchange {
    let mut exchange = Exchange::Jupiter;

    if let Some(url) = &profile.url {
        if let Some(venue) = match_domain(url) {
            exchange = venue;
        }
    }

    if let Some(links) = &profile.links {
        for link in links {
            if let Some(venue) = trade_link_venue(link) {
                return venue;
            }
        }
    }

    exchange
}

fn match_domain(url: &str) -> Option<Exchange> {
    let url = url.to_lowercase();
    EXCHANGE_DOMAINS
        .iter()
        .find(|(domain, _)| url.contains(domain))
        .map(|(_, venue)| *venue)
}

/// A link counts only when its URL names a known venue and its label
/// mentions "trade" (case-insensitive).
fn trade_link_venue(link: &TokenLink) -> Option<Exchange> {
    let url = link.url.as_deref()?;
    let label = link.label.as_deref()?;
    if !label.to_lowercase().contains("trade") {
        return None;
    }
    match_domain(url)
}

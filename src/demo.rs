//! Demo token generator
//!
//! Synthetic CanonicalToken records for when Dexscreener is unreachable
//! or the dashboard is being developed offline. Generic over the random
//! source so tests can pass a seeded rng; demo tokens are never scored.

use chrono::Utc;
use rand::Rng;

use crate::models::token::CanonicalToken;
use crate::scoring::exchange::Exchange;

pub const DEMO_TOKEN_COUNT: usize = 20;

const DEMO_EXCHANGES: &[Exchange] = &[
    Exchange::Jupiter,
    Exchange::Raydium,
    Exchange::Orca,
    Exchange::Phoenix,
    Exchange::Meteora,
    Exchange::Pumpswap,
];

pub fn demo_tokens<R: Rng>(rng: &mut R) -> Vec<CanonicalToken> {
    (1..=DEMO_TOKEN_COUNT).map(|i| demo_token(rng, i)).collect()
}

fn demo_token<R: Rng>(rng: &mut R, index: usize) -> CanonicalToken {
    let exchange = DEMO_EXCHANGES[rng.gen_range(0..DEMO_EXCHANGES.len())];
    let pair_address = random_hex_address(rng);

    CanonicalToken {
        name: format!("Demo Token {}", index),
        symbol: format!("DT{}", index),
        price_usd: rng.gen::<f64>() * index as f64 * 0.1,
        liquidity: rng.gen_range(0.0..500_000.0_f64).floor(),
        volume_24h: rng.gen_range(0.0..1_000_000.0_f64).floor(),
        price_change_24h: rng.gen_range(-10.0..10.0),
        fdv: rng.gen_range(0.0..10_000_000.0_f64).floor(),
        pair_address,
        exchange: exchange.to_string(),
        created_at: Utc::now(),
        mint: format!("demo-mint-{}", index),
        address: format!("demo-token-{}", index),
        logo_uri: String::new(),
        header_uri: String::new(),
        links: Vec::new(),
        website: String::new(),
        twitter: String::new(),
        is_memecoin: true,
        token_type: "memecoin".to_string(),
        is_new: index % 3 == 0,
        description: format!("Demo token number {} for exercising the dashboard UI.", index),
        url: String::new(),
        rugpull_score: None,
    }
}

fn random_hex_address<R: Rng>(rng: &mut R) -> String {
    const CHARS: &[u8] = b"0123456789abcdef";
    (0..44)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_twenty_tokens() {
        let mut rng = StdRng::seed_from_u64(7);
        let tokens = demo_tokens(&mut rng);

        assert_eq!(tokens.len(), DEMO_TOKEN_COUNT);
        assert_eq!(tokens[0].address, "demo-token-1");
        assert_eq!(tokens[19].symbol, "DT20");
        assert!(tokens.iter().all(|t| t.is_memecoin));
        assert!(tokens.iter().all(|t| t.rugpull_score.is_none()));
        assert_eq!(tokens[0].pair_address.len(), 44);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = demo_tokens(&mut StdRng::seed_from_u64(42));
        let b = demo_tokens(&mut StdRng::seed_from_u64(42));

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.price_usd, y.price_usd);
            assert_eq!(x.liquidity, y.liquidity);
            assert_eq!(x.exchange, y.exchange);
            assert_eq!(x.pair_address, y.pair_address);
        }
    }
}

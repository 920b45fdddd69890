//! Rugpull Risk Scorer
//!
//! Pure scoring over a CanonicalToken: six weighted heuristics whose
//! weights sum to 100. A missing input never errors, it just fails the
//! test it feeds. The five-tier risk level and the coarse rugpull
//! potential are bucketed independently from the same total.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::token::CanonicalToken;

pub const MIN_LIQUIDITY_USD: f64 = 10_000.0;
pub const MIN_VOLUME_USD: f64 = 5_000.0;
pub const MIN_AGE_DAYS: f64 = 3.0;

const RELIABLE_EXCHANGES: &[&str] = &["jupiter", "raydium", "orca", "phoenix"];
const SOCIAL_LINK_TYPES: &[&str] = &["twitter", "telegram", "discord"];
const SOCIAL_URL_MARKERS: &[&str] = &["twitter.com", "t.me", "discord.gg"];

/// One heuristic check and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskTest {
    pub name: String,
    pub passed: bool,
    pub weight: u32,
    pub description: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "very low")]
    VeryLow,
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "significant")]
    Significant,
    #[serde(rename = "high")]
    High,
}

impl RiskLevel {
    fn from_total(total: u32) -> Self {
        match total {
            85..=u32::MAX => RiskLevel::VeryLow,
            70..=84 => RiskLevel::Low,
            50..=69 => RiskLevel::Moderate,
            30..=49 => RiskLevel::Significant,
            _ => RiskLevel::High,
        }
    }

    pub fn comment(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => {
                "This token shows very positive characteristics with minimal rugpull risk. \
                 It passed almost every safety test."
            }
            RiskLevel::Low => {
                "This token looks legitimate with a few minor risk factors. \
                 The rugpull risk is low but not nonexistent."
            }
            RiskLevel::Moderate => {
                "This token shows several warning signs. \
                 Be careful and only invest what you are prepared to lose."
            }
            RiskLevel::Significant => {
                "Warning! This token shows many warning signs typical of rugpulls. \
                 The risk is considerable."
            }
            RiskLevel::High => {
                "DANGER! This token shows almost every warning sign of a potential rugpull. \
                 Investing is strongly discouraged."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RugpullPotential {
    High,
    Possible,
    Low,
}

impl RugpullPotential {
    fn from_total(total: u32) -> Self {
        if total < 50 {
            RugpullPotential::High
        } else if total < 70 {
            RugpullPotential::Possible
        } else {
            RugpullPotential::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Total passed weight scaled to 0-10.
    pub score: f64,
    pub passed_tests: usize,
    pub total_tests: usize,
    pub tests: Vec<RiskTest>,
    pub level: RiskLevel,
    pub risk_comment: String,
    pub key_risk_factors: Vec<String>,
    pub rugpull_potential: RugpullPotential,
}

/// Score a token. Deterministic, no I/O.
pub fn score_token(token: &CanonicalToken) -> RiskAssessment {
    let tests = vec![
        liquidity_test(token),
        age_test(token),
        social_test(token),
        website_test(token),
        volume_test(token),
        exchange_test(token),
    ];

    let total: u32 = tests.iter().filter(|t| t.passed).map(|t| t.weight).sum();
    let passed_tests = tests.iter().filter(|t| t.passed).count();
    let key_risk_factors = tests
        .iter()
        .filter(|t| !t.passed)
        .map(|t| key_risk_factor(&t.name).to_string())
        .collect();

    let level = RiskLevel::from_total(total);

    RiskAssessment {
        score: total as f64 / 10.0,
        passed_tests,
        total_tests: tests.len(),
        level,
        risk_comment: level.comment().to_string(),
        key_risk_factors,
        rugpull_potential: RugpullPotential::from_total(total),
        tests,
    }
}

fn liquidity_test(token: &CanonicalToken) -> RiskTest {
    RiskTest {
        name: "liquidity".to_string(),
        passed: token.liquidity >= MIN_LIQUIDITY_USD,
        weight: 25,
        description: "Sufficient liquidity".to_string(),
        details: "Liquidity must be at least $10,000 to limit price manipulation".to_string(),
        actual_value: None,
    }
}

fn age_test(token: &CanonicalToken) -> RiskTest {
    let age = Utc::now() - token.created_at;
    let age_days = age.num_milliseconds() as f64 / (1000.0 * 60.0 * 60.0 * 24.0);
    RiskTest {
        name: "age".to_string(),
        passed: age_days >= MIN_AGE_DAYS,
        weight: 20,
        description: "Token older than 3 days".to_string(),
        details: "Rugpulls often happen in the first days after launch".to_string(),
        actual_value: Some(format!("{:.1} days", age_days)),
    }
}

fn social_test(token: &CanonicalToken) -> RiskTest {
    let social_count = token
        .links
        .iter()
        .filter(|link| {
            let typed_social = link
                .link_type
                .as_deref()
                .map(|t| SOCIAL_LINK_TYPES.contains(&t.to_lowercase().as_str()))
                .unwrap_or(false);
            let url_social = link
                .url
                .as_deref()
                .map(|u| SOCIAL_URL_MARKERS.iter().any(|marker| u.contains(marker)))
                .unwrap_or(false);
            typed_social || url_social
        })
        .count();

    RiskTest {
        name: "socialMedia".to_string(),
        passed: social_count > 0,
        weight: 15,
        description: "Social media presence".to_string(),
        details: "Missing active social media is a major red flag".to_string(),
        actual_value: Some(format!("{} social links found", social_count)),
    }
}

fn website_test(token: &CanonicalToken) -> RiskTest {
    let link_site = token.links.iter().find(|link| {
        link.link_type.as_deref() == Some("website")
            || link.label.as_deref() == Some("Website")
            || link
                .url
                .as_deref()
                .map(|u| u.starts_with("http://") || u.starts_with("https://"))
                .unwrap_or(false)
    });
    let passed = !token.website.is_empty() || link_site.is_some();

    let actual_value = if passed {
        if !token.website.is_empty() {
            Some(token.website.clone())
        } else {
            Some(
                link_site
                    .and_then(|l| l.url.clone())
                    .unwrap_or_else(|| "website found".to_string()),
            )
        }
    } else {
        None
    };

    RiskTest {
        name: "website".to_string(),
        passed,
        weight: 15,
        description: "Existing website".to_string(),
        details: "A legitimate project usually has a website".to_string(),
        actual_value,
    }
}

fn volume_test(token: &CanonicalToken) -> RiskTest {
    RiskTest {
        name: "volume".to_string(),
        passed: token.volume_24h >= MIN_VOLUME_USD,
        weight: 15,
        description: "Significant trading volume".to_string(),
        details: "Low trading volume indicates a lack of interest or manipulation".to_string(),
        actual_value: Some(format!("${:.0}", token.volume_24h)),
    }
}

fn exchange_test(token: &CanonicalToken) -> RiskTest {
    RiskTest {
        name: "exchange".to_string(),
        passed: RELIABLE_EXCHANGES.contains(&token.exchange.to_lowercase().as_str()),
        weight: 10,
        description: "Listed on a reliable exchange".to_string(),
        details: "Established exchanges usually have vetting processes".to_string(),
        actual_value: Some(token.exchange.clone()),
    }
}

fn key_risk_factor(test_name: &str) -> &'static str {
    match test_name {
        "liquidity" => {
            "Insufficient liquidity: high risk of price manipulation and difficulty selling"
        }
        "age" => "Very recent token: most rugpulls happen within the first 72 hours",
        "socialMedia" => {
            "No social media presence: lack of transparency and community engagement"
        }
        "website" => "No website: suggests a lack of professionalism and long-term commitment",
        "volume" => "Low trading volume: may indicate a lack of interest or manipulation",
        "exchange" => "Not listed on a major exchange: fewer guarantees of legitimacy",
        _ => "Unknown risk factor",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dexscreener::TokenLink;
    use chrono::Duration;

    fn bare_token() -> CanonicalToken {
        CanonicalToken {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            price_usd: 0.0,
            liquidity: 0.0,
            volume_24h: 0.0,
            price_change_24h: 0.0,
            fdv: 0.0,
            pair_address: String::new(),
            exchange: "unknown-dex".to_string(),
            created_at: Utc::now(),
            mint: "MINT".to_string(),
            address: "MINT".to_string(),
            logo_uri: String::new(),
            header_uri: String::new(),
            links: Vec::new(),
            website: String::new(),
            twitter: String::new(),
            is_memecoin: true,
            token_type: "memecoin".to_string(),
            is_new: true,
            description: String::new(),
            url: String::new(),
            rugpull_score: None,
        }
    }

    fn strong_token() -> CanonicalToken {
        let mut token = bare_token();
        token.liquidity = 15_000.0;
        token.volume_24h = 6_000.0;
        token.created_at = Utc::now() - Duration::days(4);
        token.exchange = "raydium".to_string();
        token.website = "https://x.io".to_string();
        token.links = vec![
            TokenLink {
                label: Some("Website".to_string()),
                link_type: None,
                url: Some("https://x.io".to_string()),
            },
            TokenLink {
                label: None,
                link_type: Some("twitter".to_string()),
                url: Some("https://twitter.com/x".to_string()),
            },
        ];
        token
    }

    #[test]
    fn test_all_tests_pass_scores_ten() {
        let assessment = score_token(&strong_token());

        assert_eq!(assessment.score, 10.0);
        assert_eq!(assessment.passed_tests, 6);
        assert_eq!(assessment.total_tests, 6);
        assert_eq!(assessment.level, RiskLevel::VeryLow);
        assert_eq!(assessment.rugpull_potential, RugpullPotential::Low);
        assert!(assessment.key_risk_factors.is_empty());
    }

    #[test]
    fn test_bare_token_fails_everything() {
        let assessment = score_token(&bare_token());

        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.passed_tests, 0);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.rugpull_potential, RugpullPotential::High);
        assert_eq!(assessment.key_risk_factors.len(), 6);
    }

    #[test]
    fn test_fresh_token_on_jupiter_scores_one() {
        // No pairs, no links: only the default-jupiter exchange test passes.
        let mut token = bare_token();
        token.exchange = "jupiter".to_string();

        let assessment = score_token(&token);
        assert_eq!(assessment.score, 1.0);
        assert_eq!(assessment.passed_tests, 1);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(assessment.rugpull_potential, RugpullPotential::High);
        assert_eq!(assessment.key_risk_factors.len(), 5);
    }

    #[test]
    fn test_key_risk_factors_follow_test_order() {
        let assessment = score_token(&bare_token());
        assert!(assessment.key_risk_factors[0].starts_with("Insufficient liquidity"));
        assert!(assessment.key_risk_factors[1].starts_with("Very recent token"));
        assert!(assessment.key_risk_factors[2].starts_with("No social media"));
        assert!(assessment.key_risk_factors[3].starts_with("No website"));
        assert!(assessment.key_risk_factors[4].starts_with("Low trading volume"));
        assert!(assessment.key_risk_factors[5].starts_with("Not listed"));
    }

    #[test]
    fn test_level_and_potential_bucket_independently() {
        // liquidity (25) and age (20) fail; social, website, volume and
        // exchange pass for a total of 55.
        let mut token = strong_token();
        token.liquidity = 1_000.0;
        token.created_at = Utc::now();
        let assessment = score_token(&token);

        assert_eq!(assessment.score, 5.5);
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(assessment.rugpull_potential, RugpullPotential::Possible);
    }

    #[test]
    fn test_exact_tier_boundaries() {
        assert_eq!(RiskLevel::from_total(100), RiskLevel::VeryLow);
        assert_eq!(RiskLevel::from_total(85), RiskLevel::VeryLow);
        assert_eq!(RiskLevel::from_total(84), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(70), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(69), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_total(50), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_total(49), RiskLevel::Significant);
        assert_eq!(RiskLevel::from_total(30), RiskLevel::Significant);
        assert_eq!(RiskLevel::from_total(29), RiskLevel::High);
        assert_eq!(RiskLevel::from_total(0), RiskLevel::High);

        assert_eq!(RugpullPotential::from_total(49), RugpullPotential::High);
        assert_eq!(RugpullPotential::from_total(50), RugpullPotential::Possible);
        assert_eq!(RugpullPotential::from_total(69), RugpullPotential::Possible);
        assert_eq!(RugpullPotential::from_total(70), RugpullPotential::Low);
    }

    #[test]
    fn test_social_matches_url_markers_without_type() {
        let mut token = bare_token();
        token.links = vec![TokenLink {
            label: None,
            link_type: None,
            url: Some("https://t.me/somegroup".to_string()),
        }];

        let assessment = score_token(&token);
        let social = assessment
            .tests
            .iter()
            .find(|t| t.name == "socialMedia")
            .unwrap();
        assert!(social.passed);
        assert_eq!(social.actual_value.as_deref(), Some("1 social links found"));
    }

    #[test]
    fn test_website_passes_on_http_link_url() {
        let mut token = bare_token();
        token.links = vec![TokenLink {
            label: Some("Docs".to_string()),
            link_type: None,
            url: Some("https://docs.example.io".to_string()),
        }];

        let assessment = score_token(&token);
        let website = assessment.tests.iter().find(|t| t.name == "website").unwrap();
        assert!(website.passed);
    }

    #[test]
    fn test_exchange_check_is_case_insensitive() {
        let mut token = bare_token();
        token.exchange = "Raydium".to_string();

        let assessment = score_token(&token);
        let exchange = assessment.tests.iter().find(|t| t.name == "exchange").unwrap();
        assert!(exchange.passed);
        assert_eq!(exchange.actual_value.as_deref(), Some("Raydium"));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut token = bare_token();
        token.liquidity = MIN_LIQUIDITY_USD;
        token.volume_24h = MIN_VOLUME_USD;

        let assessment = score_token(&token);
        assert!(assessment.tests.iter().find(|t| t.name == "liquidity").unwrap().passed);
        assert!(assessment.tests.iter().find(|t| t.name == "volume").unwrap().passed);

        token.liquidity = MIN_LIQUIDITY_USD - 0.01;
        token.volume_24h = MIN_VOLUME_USD - 0.01;
        let assessment = score_token(&token);
        assert!(!assessment.tests.iter().find(|t| t.name == "liquidity").unwrap().passed);
        assert!(!assessment.tests.iter().find(|t| t.name == "volume").unwrap().passed);
    }

    #[test]
    fn test_serializes_in_dashboard_shape() {
        let assessment = score_token(&strong_token());
        let value = serde_json::to_value(&assessment).unwrap();

        assert_eq!(value["score"], 10.0);
        assert_eq!(value["level"], "very low");
        assert_eq!(value["rugpullPotential"], "low");
        assert_eq!(value["passedTests"], 6);
        assert_eq!(value["tests"].as_array().unwrap().len(), 6);
        assert_eq!(value["tests"][0]["name"], "liquidity");
        assert_eq!(value["tests"][0]["weight"], 25);
    }
}

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::matching::keywords::{KeywordConfig, DEFAULT_MIN_TOKEN_LEN};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// How many of the most recent job postings are fetched before scoring.
    pub candidate_pool_size: usize,
    /// Default number of recommendations returned.
    pub recommendation_limit: usize,
    pub matching: KeywordConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut matching = KeywordConfig::default();
        if let Ok(raw) = std::env::var("MATCH_STOP_WORDS") {
            matching.stop_words = parse_stop_words(&raw);
        }
        matching.min_token_len = env_or("MATCH_MIN_TOKEN_LEN", DEFAULT_MIN_TOKEN_LEN)?;

        let config = Config {
            database_url: require_env("DATABASE_URL")?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            candidate_pool_size: env_or("CANDIDATE_POOL_SIZE", 20)?,
            recommendation_limit: env_or("RECOMMENDATION_LIMIT", 3)?,
            matching,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.candidate_pool_size >= 1,
            "CANDIDATE_POOL_SIZE must be at least 1"
        );
        ensure!(
            self.recommendation_limit >= 1,
            "RECOMMENDATION_LIMIT must be at least 1"
        );
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .ok()
        .with_context(|| format!("{key} has an invalid value: '{raw}'"))
}

/// Parses a comma-separated stop-word list. Entries are trimmed and lowercased.
pub fn parse_stop_words(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

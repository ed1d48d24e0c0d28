use std::str::FromStr;

use anyhow::{Context, Result};

/// Which matching engine variant ranks completed quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Weighted keyword matching against the program catalog.
    Keyword,
    /// Letter counting over the six fixed categories.
    Category,
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(StrategyKind::Keyword),
            "category" => Ok(StrategyKind::Category),
            other => anyhow::bail!("Unknown MATCH_STRATEGY '{other}' (expected 'keyword' or 'category')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, quiz results are kept in memory for the process lifetime.
    pub database_url: Option<String>,
    pub match_strategy: StrategyKind,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            match_strategy: optional_env("MATCH_STRATEGY")
                .as_deref()
                .unwrap_or("keyword")
                .parse()
                .context("MATCH_STRATEGY must be 'keyword' or 'category'")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parses_case_insensitively() {
        assert_eq!("keyword".parse::<StrategyKind>().unwrap(), StrategyKind::Keyword);
        assert_eq!(" Category ".parse::<StrategyKind>().unwrap(), StrategyKind::Category);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = "random".parse::<StrategyKind>().unwrap_err();
        assert!(err.to_string().contains("random"));
    }
}

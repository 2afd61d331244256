use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Inbox that receives review requests and the daily pending-review
    /// digest.
    pub admin_email: String,
    /// Hours a listing may sit in pending review before the daily digest
    /// flags it.
    pub pending_review_max_age_hours: u64,
    /// Emit per-change moderation diagnostics at debug level.
    pub verbose_moderation_logging: bool,
    /// Optional newline-separated word list merged into the screening
    /// lexicon at startup.
    pub supplementary_lexicon_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development convenience)
        let _ = dotenv();

        Ok(Self {
            admin_email: env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?,
            pending_review_max_age_hours: env::var("PENDING_REVIEW_MAX_AGE_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .context("PENDING_REVIEW_MAX_AGE_HOURS must be a number of hours")?,
            verbose_moderation_logging: env::var("VERBOSE_MODERATION_LOGGING")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            supplementary_lexicon_path: env::var("SUPPLEMENTARY_LEXICON_PATH").ok(),
        })
    }

    /// Fixed configuration for tests; reads no environment.
    pub fn for_tests() -> Self {
        Self {
            admin_email: "admins@example.org".to_string(),
            pending_review_max_age_hours: 24,
            verbose_moderation_logging: false,
            supplementary_lexicon_path: None,
        }
    }
}

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables. Everything
/// is optional; a bare environment yields working defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Cap on the batch size after deduplication (MATCHER_MAX_JOBS).
    pub max_jobs: Option<usize>,
    /// Fallback candidate location (MATCHER_DEFAULT_LOCATION).
    pub default_location: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_jobs = match std::env::var("MATCHER_MAX_JOBS") {
            Ok(raw) => Some(
                raw.parse::<usize>()
                    .context("MATCHER_MAX_JOBS must be a non-negative integer")?,
            ),
            Err(_) => None,
        };

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_jobs,
            default_location: std::env::var("MATCHER_DEFAULT_LOCATION").ok(),
        })
    }
}

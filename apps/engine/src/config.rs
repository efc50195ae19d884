use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Where export artifacts are written.
    pub export_dir: PathBuf,
    /// Settle delay after a cooperative page swap during export capture.
    pub export_settle_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let settle_ms = std::env::var("EXPORT_SETTLE_MS")
            .unwrap_or_else(|_| "300".to_string())
            .parse::<u64>()
            .context("EXPORT_SETTLE_MS must be a duration in milliseconds")?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            export_dir: std::env::var("EXPORT_DIR")
                .unwrap_or_else(|_| "./exports".to_string())
                .into(),
            export_settle_delay: Duration::from_millis(settle_ms),
        })
    }
}

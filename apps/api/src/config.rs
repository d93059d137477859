use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated; everything else has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// Enables the LLM-backed advisor when set.
    pub anthropic_api_key: Option<String>,
    /// Overrides the Messages API endpoint (gateways, proxies).
    pub anthropic_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: optional("CATALOG_PATH").map(PathBuf::from),
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional("ANTHROPIC_API_URL"),
        })
    }
}

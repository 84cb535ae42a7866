use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Extra dictionary file merged into the shared dictionary at startup.
    pub dictionary_path: Option<PathBuf>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            dictionary_path: None,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            dictionary_path: lookup("SKILL_DICTIONARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_body_bytes: match lookup("MAX_BODY_BYTES") {
                Some(bytes) => bytes
                    .parse::<usize>()
                    .context("MAX_BODY_BYTES must be a positive integer")?,
                None => defaults.max_body_bytes,
            },
        })
    }
}

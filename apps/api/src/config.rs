use anyhow::{Context, Result};

use crate::form::photo::DEFAULT_MAX_PHOTO_BYTES;

/// Service configuration loaded from environment variables (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for an accepted profile photo, in bytes.
    pub max_photo_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_photo_bytes: match std::env::var("MAX_PHOTO_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_PHOTO_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_PHOTO_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_photo_bytes: DEFAULT_MAX_PHOTO_BYTES,
        }
    }
}

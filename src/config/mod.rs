//! Configuration module for the FoodML client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the FoodML backend (without the `/api` prefix)
    pub api_url: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("FOODML_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level = env::var("FOODML_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self { api_url, log_level }
    }

    /// Build a configuration pointing at an explicit base URL.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            log_level: "info".to_string(),
        }
    }
}

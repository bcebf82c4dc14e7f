//! Configuration module

use std::env;

/// Default AbuseIPDB blacklist endpoint
pub const DEFAULT_ABUSEIPDB_URL: &str = "https://api.abuseipdb.com/api/v2/blacklist";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// AbuseIPDB API key; threat map is empty without it
    pub abuseipdb_api_key: Option<String>,

    /// AbuseIPDB blacklist URL
    pub abuseipdb_url: String,

    /// Minimum abuse confidence score (0-100)
    pub confidence_minimum: u8,

    /// Max entries requested from the blacklist
    pub blacklist_limit: u32,

    /// Upstream request timeout in seconds
    pub upstream_timeout_secs: u64,

    /// Directory served for the dashboard page and wasm bundle
    pub static_dir: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),

            abuseipdb_api_key: env::var("ABUSEIPDB_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),

            abuseipdb_url: env::var("ABUSEIPDB_URL")
                .unwrap_or_else(|_| DEFAULT_ABUSEIPDB_URL.to_string()),

            confidence_minimum: env::var("ABUSEIPDB_CONFIDENCE_MINIMUM")
                .ok()
                .and_then(|c| c.parse().ok())
                .filter(|c| *c <= 100)
                .unwrap_or(85),

            blacklist_limit: env::var("ABUSEIPDB_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(20),

            upstream_timeout_secs: env::var("ABUSEIPDB_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(20),

            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string()),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 10000,
            abuseipdb_api_key: None,
            abuseipdb_url: DEFAULT_ABUSEIPDB_URL.to_string(),
            confidence_minimum: 85,
            blacklist_limit: 20,
            upstream_timeout_secs: 20,
            static_dir: "static".to_string(),
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_upstream_query() {
        let config = Config::default();
        assert_eq!(config.confidence_minimum, 85);
        assert_eq!(config.blacklist_limit, 20);
        assert_eq!(config.upstream_timeout_secs, 20);
        assert!(config.abuseipdb_api_key.is_none());
        assert!(!config.is_production());
    }
}

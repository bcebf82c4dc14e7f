//! AbuseIPDB API Client
//!
//! Pulls the blacklist that feeds `/api/threat-map`.

use std::time::Duration;

use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::models::{BlacklistResponse, ThreatPoint};

#[derive(Debug, thiserror::Error)]
pub enum AbuseIpDbError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Blacklist query parameters
#[derive(Debug, Clone, Copy)]
pub struct BlacklistQuery {
    pub confidence_minimum: u8,
    pub limit: u32,
}

impl BlacklistQuery {
    pub fn params(&self) -> [(&'static str, String); 2] {
        [
            ("confidenceMinimum", self.confidence_minimum.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// AbuseIPDB client; `None` key means the feed is disabled
#[derive(Clone)]
pub struct AbuseIpDbClient {
    http_client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    query: BlacklistQuery,
}

impl AbuseIpDbClient {
    pub fn new(config: &Config) -> Result<Self, AbuseIpDbError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            url: config.abuseipdb_url.clone(),
            api_key: config.abuseipdb_api_key.clone(),
            query: BlacklistQuery {
                confidence_minimum: config.confidence_minimum,
                limit: config.blacklist_limit,
            },
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetch the blacklist as threat points; empty when no key is configured
    pub async fn threat_points(&self) -> Result<Vec<ThreatPoint>, AbuseIpDbError> {
        let Some(key) = &self.api_key else {
            return Ok(Vec::new());
        };

        let response = self.http_client
            .get(&self.url)
            .header("Key", key)
            .header(ACCEPT, "application/json")
            .query(&self.query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AbuseIpDbError::Status(status.as_u16()));
        }

        let body: BlacklistResponse = response
            .json()
            .await
            .map_err(|e| AbuseIpDbError::Parse(e.to_string()))?;

        let total = body.data.len();
        let points = body.into_threat_points();
        tracing::debug!("AbuseIPDB blacklist: {} entries, {} with coordinates", total, points.len());

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let query = BlacklistQuery { confidence_minimum: 85, limit: 20 };
        assert_eq!(query.params(), [
            ("confidenceMinimum", "85".to_string()),
            ("limit", "20".to_string()),
        ]);
    }

    #[tokio::test]
    async fn test_disabled_without_key() {
        let client = AbuseIpDbClient::new(&Config::default()).unwrap();
        assert!(!client.is_enabled());
        assert!(client.threat_points().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        let config = Config {
            abuseipdb_api_key: Some("test-key".into()),
            abuseipdb_url: "http://127.0.0.1:9/api/v2/blacklist".into(),
            upstream_timeout_secs: 2,
            ..Config::default()
        };
        let client = AbuseIpDbClient::new(&config).unwrap();

        match client.threat_points().await {
            Err(AbuseIpDbError::Network(_)) => {}
            other => panic!("expected network error, got {:?}", other.map(|p| p.len())),
        }
    }
}

//! Threat map models

use serde::{Deserialize, Serialize};

/// Risk assigned to every blacklist entry
pub const BLACKLIST_RISK: &str = "malicious";

/// One marker on the dashboard threat map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatPoint {
    pub ip: String,
    /// ISO country code, empty when upstream omits it
    pub country: String,
    pub risk: String,
    pub lat: f64,
    pub lon: f64,
}

/// AbuseIPDB `/blacklist` response body
#[derive(Debug, Default, Deserialize)]
pub struct BlacklistResponse {
    #[serde(default)]
    pub data: Vec<BlacklistEntry>,
}

/// A single blacklist entry; coordinates are only present on paid plans
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistEntry {
    pub ip_address: Option<String>,
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl BlacklistEntry {
    /// Map to a threat point, `None` without an address or coordinates
    pub fn to_threat_point(&self) -> Option<ThreatPoint> {
        let ip = self.ip_address.as_ref().filter(|ip| !ip.is_empty())?;
        Some(ThreatPoint {
            ip: ip.clone(),
            country: self.country_code.clone().unwrap_or_default(),
            risk: BLACKLIST_RISK.to_string(),
            lat: self.latitude?,
            lon: self.longitude?,
        })
    }
}

impl BlacklistResponse {
    pub fn into_threat_points(self) -> Vec<ThreatPoint> {
        self.data
            .iter()
            .filter_map(BlacklistEntry::to_threat_point)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "meta": {"generatedAt": "2024-05-01T10:00:00+00:00"},
        "data": [
            {"ipAddress": "185.220.101.1", "countryCode": "DE", "abuseConfidenceScore": 100,
             "lastReportedAt": "2024-05-01T09:59:00+00:00", "latitude": 52.52, "longitude": 13.4},
            {"ipAddress": "45.95.147.10", "countryCode": "NL", "abuseConfidenceScore": 100,
             "lastReportedAt": "2024-05-01T09:58:00+00:00"},
            {"countryCode": "US", "latitude": 37.77, "longitude": -122.41}
        ]
    }"#;

    #[test]
    fn test_maps_entries_with_coordinates() {
        let response: BlacklistResponse = serde_json::from_str(SAMPLE).unwrap();
        let points = response.into_threat_points();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0], ThreatPoint {
            ip: "185.220.101.1".into(),
            country: "DE".into(),
            risk: "malicious".into(),
            lat: 52.52,
            lon: 13.4,
        });
    }

    #[test]
    fn test_missing_data_is_empty() {
        let response: BlacklistResponse = serde_json::from_str(r#"{"meta": {}}"#).unwrap();
        assert!(response.into_threat_points().is_empty());
    }

    #[test]
    fn test_serializes_widget_shape() {
        let point = ThreatPoint {
            ip: "203.0.113.45".into(),
            country: String::new(),
            risk: BLACKLIST_RISK.into(),
            lat: 35.68,
            lon: 139.76,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["ip"], "203.0.113.45");
        assert_eq!(value["risk"], "malicious");
        assert_eq!(value["country"], "");
        assert_eq!(value["lon"], 139.76);
    }
}

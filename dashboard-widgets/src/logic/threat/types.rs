//! Threat Types
//!
//! Wire format of `/api/threat-map` and the risk categories that drive
//! marker color. No logic here beyond parsing and coloring.

use serde::{Deserialize, Serialize};

use crate::constants;

// ============================================================================
// RISK CATEGORY
// ============================================================================

/// Risk levels reported by the threat feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Risk {
    Malicious,
    Suspicious,
    Harmless,
}

impl Risk {
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::Malicious => "malicious",
            Risk::Suspicious => "suspicious",
            Risk::Harmless => "harmless",
        }
    }

    /// Lenient parse: anything unrecognized is treated as harmless
    pub fn parse(value: &str) -> Self {
        match value {
            "malicious" => Risk::Malicious,
            "suspicious" => Risk::Suspicious,
            _ => Risk::Harmless,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Risk::Malicious => constants::COLOR_MALICIOUS,   // Red
            Risk::Suspicious => constants::COLOR_SUSPICIOUS, // Amber
            Risk::Harmless => constants::COLOR_HARMLESS,     // Green
        }
    }
}

impl std::fmt::Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Marker color for a raw risk string
pub fn risk_color(risk: &str) -> &'static str {
    Risk::parse(risk).color()
}

// ============================================================================
// THREAT MARKER
// ============================================================================

/// One threat data point, keyed by `ip`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatMarker {
    pub ip: String,
    pub country: String,
    /// Raw category string; shown verbatim in the detail dialog
    pub risk: String,
    pub lat: f64,
    pub lon: f64,
}

impl ThreatMarker {
    pub fn new(ip: &str, country: &str, risk: Risk, lat: f64, lon: f64) -> Self {
        Self {
            ip: ip.to_string(),
            country: country.to_string(),
            risk: risk.as_str().to_string(),
            lat,
            lon,
        }
    }

    pub fn risk_level(&self) -> Risk {
        Risk::parse(&self.risk)
    }

    pub fn color(&self) -> &'static str {
        self.risk_level().color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_colors() {
        assert_eq!(risk_color("malicious"), "#ef4444");
        assert_eq!(risk_color("suspicious"), "#f59e0b");
        assert_eq!(risk_color("harmless"), "#22c55e");
    }

    #[test]
    fn test_unknown_risk_is_harmless() {
        assert_eq!(risk_color("critical"), "#22c55e");
        assert_eq!(risk_color(""), "#22c55e");
        assert_eq!(risk_color("MALICIOUS"), "#22c55e");
    }

    #[test]
    fn test_marker_keeps_raw_risk() {
        let json = r#"{"ip":"1.2.3.4","country":"FR","risk":"unknown","lat":48.8,"lon":2.3}"#;
        let marker: ThreatMarker = serde_json::from_str(json).unwrap();
        assert_eq!(marker.risk, "unknown");
        assert_eq!(marker.risk_level(), Risk::Harmless);
        assert_eq!(marker.color(), "#22c55e");
    }

    #[test]
    fn test_feed_payload_decodes() {
        let json = r#"[
            {"ip":"45.33.12.1","country":"US","risk":"malicious","lat":37.77,"lon":-122.41},
            {"ip":"103.21.244.1","country":"IN","risk":"suspicious","lat":28.61,"lon":77.2}
        ]"#;
        let markers: Vec<ThreatMarker> = serde_json::from_str(json).unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].risk_level(), Risk::Suspicious);
        assert_eq!(markers[0].lon, -122.41);
    }
}

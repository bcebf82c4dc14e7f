//! Demo dataset
//!
//! Fixed four-entry fallback used in demo mode and whenever the live feed
//! fails or comes back empty.

use super::types::{Risk, ThreatMarker};

pub fn demo_threats() -> Vec<ThreatMarker> {
    vec![
        ThreatMarker::new("45.33.12.1", "US", Risk::Malicious, 37.77, -122.41),
        ThreatMarker::new("103.21.244.1", "IN", Risk::Suspicious, 28.61, 77.20),
        ThreatMarker::new("91.198.174.192", "DE", Risk::Malicious, 52.52, 13.40),
        ThreatMarker::new("203.0.113.45", "JP", Risk::Harmless, 35.68, 139.76),
    ]
}

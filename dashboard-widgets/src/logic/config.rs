//! Dashboard configuration
//!
//! Widget-local settings handed to each widget at mount time. Defaults
//! come from `constants`; a host page may pass a JSON object overriding
//! any subset of fields.

use serde::{Deserialize, Serialize};

use crate::constants;
use super::kpi::KpiTarget;
use super::threat::DataMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Threat feed URL
    pub threat_endpoint: String,

    /// TopoJSON world geometry URL
    pub world_atlas_url: String,

    /// Threat refresh interval (ms)
    pub refresh_interval_ms: u32,

    /// Globe canvas height (px)
    pub globe_height: u32,

    /// Threat map height (px)
    pub map_height: u32,

    /// Start the map in demo mode
    pub start_in_demo: bool,

    /// Counter targets
    pub kpi: KpiTarget,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            threat_endpoint: constants::DEFAULT_THREAT_ENDPOINT.to_string(),
            world_atlas_url: constants::DEFAULT_WORLD_ATLAS_URL.to_string(),
            refresh_interval_ms: constants::DEFAULT_REFRESH_INTERVAL_MS,
            globe_height: constants::GLOBE_HEIGHT,
            map_height: constants::MAP_HEIGHT,
            start_in_demo: false,
            kpi: KpiTarget::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse host overrides; `None` or blank input yields the defaults.
    ///
    /// The refresh interval is raised to `MIN_REFRESH_INTERVAL_MS`.
    pub fn from_json(json: Option<&str>) -> Result<Self, serde_json::Error> {
        let config: Self = match json.map(str::trim) {
            Some(s) if !s.is_empty() => serde_json::from_str(s)?,
            _ => Self::default(),
        };
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.refresh_interval_ms < constants::MIN_REFRESH_INTERVAL_MS {
            log::warn!(
                "refresh_interval_ms {} too small, using {}",
                self.refresh_interval_ms,
                constants::MIN_REFRESH_INTERVAL_MS
            );
            self.refresh_interval_ms = constants::MIN_REFRESH_INTERVAL_MS;
        }
        self
    }

    pub fn initial_mode(&self) -> DataMode {
        if self.start_in_demo {
            DataMode::Demo
        } else {
            DataMode::Live
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.threat_endpoint, "/api/threat-map");
        assert_eq!(config.refresh_interval_ms, 60_000);
        assert_eq!(config.globe_height, 420);
        assert_eq!(config.map_height, 380);
        assert_eq!(config.initial_mode(), DataMode::Live);
    }

    #[test]
    fn test_blank_input_is_default() {
        assert_eq!(DashboardConfig::from_json(None).unwrap(), DashboardConfig::default());
        assert_eq!(DashboardConfig::from_json(Some("  ")).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_json(Some(
            r#"{"threat_endpoint":"/v2/threats","start_in_demo":true,"kpi":{"total":10}}"#,
        ))
        .unwrap();
        assert_eq!(config.threat_endpoint, "/v2/threats");
        assert_eq!(config.initial_mode(), DataMode::Demo);
        assert_eq!(config.kpi.total, 10);
        assert_eq!(config.kpi.malicious, 63);
        assert_eq!(config.world_atlas_url, constants::DEFAULT_WORLD_ATLAS_URL);
    }

    #[test]
    fn test_demo_start_highlights_demo_button() {
        let config = DashboardConfig::from_json(Some(r#"{"start_in_demo":true}"#)).unwrap();
        assert_eq!(config.initial_mode().button_id(), constants::DEMO_BUTTON_ID);
        assert_eq!(DashboardConfig::default().initial_mode().button_id(), constants::LIVE_BUTTON_ID);
    }

    #[test]
    fn test_refresh_interval_has_a_floor() {
        let zero = DashboardConfig::from_json(Some(r#"{"refresh_interval_ms":0}"#)).unwrap();
        assert_eq!(zero.refresh_interval_ms, constants::MIN_REFRESH_INTERVAL_MS);

        let slow = DashboardConfig::from_json(Some(r#"{"refresh_interval_ms":120000}"#)).unwrap();
        assert_eq!(slow.refresh_interval_ms, 120_000);
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(DashboardConfig::from_json(Some("{not json")).is_err());
    }
}

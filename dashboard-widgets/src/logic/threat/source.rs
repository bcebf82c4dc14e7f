//! Threat source selection
//!
//! Decides which marker set a refresh renders: the live feed when it
//! delivers something, the demo set otherwise. Also hands out refresh
//! tokens so a fetch that outlives a mode switch can be discarded.

use thiserror::Error;

use crate::constants;

use super::demo::demo_threats;
use super::types::ThreatMarker;

/// Where markers come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    #[default]
    Live,
    Demo,
}

impl DataMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataMode::Live => "live",
            DataMode::Demo => "demo",
        }
    }

    /// Id of the button that selects this mode
    pub fn button_id(&self) -> &'static str {
        match self {
            DataMode::Live => constants::LIVE_BUTTON_ID,
            DataMode::Demo => constants::DEMO_BUTTON_ID,
        }
    }
}

/// Why the live feed produced nothing usable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("could not decode payload: {0}")]
    Decode(String),
}

/// Markers to render for a completed live fetch.
///
/// Errors and empty payloads both fall back to the demo set.
pub fn select_threats(result: Result<Vec<ThreatMarker>, FetchError>) -> Vec<ThreatMarker> {
    match result {
        Ok(threats) if !threats.is_empty() => threats,
        Ok(_) => {
            log::debug!("Threat feed empty, using demo data");
            demo_threats()
        }
        Err(e) => {
            log::debug!("Threat feed unavailable ({}), using demo data", e);
            demo_threats()
        }
    }
}

/// Token carried by one in-flight refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken {
    generation: u64,
    mode: DataMode,
}

impl RefreshToken {
    pub fn mode(&self) -> DataMode {
        self.mode
    }
}

/// Mode flag plus generation counter for one map instance
#[derive(Debug, Clone, Default)]
pub struct RefreshGuard {
    mode: DataMode,
    generation: u64,
}

impl RefreshGuard {
    pub fn new(mode: DataMode) -> Self {
        Self { mode, generation: 0 }
    }

    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Switch modes; anything still in flight becomes stale
    pub fn set_mode(&mut self, mode: DataMode) {
        self.mode = mode;
        self.generation += 1;
    }

    /// Token for a refresh starting now
    pub fn begin(&self) -> RefreshToken {
        RefreshToken {
            generation: self.generation,
            mode: self.mode,
        }
    }

    /// Whether a completed refresh may still be rendered
    pub fn is_current(&self, token: &RefreshToken) -> bool {
        token.generation == self.generation
    }
}

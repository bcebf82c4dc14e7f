//! KPI Targets
//!
//! Fixed placeholder numbers for the four dashboard counters and
//! the element/duration each one animates with.

use serde::{Deserialize, Serialize};

use crate::constants;
use super::easing::CounterAnimation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiTarget {
    pub total: u64,
    pub malicious: u64,
    pub harmless: u64,
    pub suspicious: u64,
}

impl Default for KpiTarget {
    fn default() -> Self {
        Self {
            total: constants::KPI_TOTAL,
            malicious: constants::KPI_MALICIOUS,
            harmless: constants::KPI_HARMLESS,
            suspicious: constants::KPI_SUSPICIOUS,
        }
    }
}

/// One counter bound to a DOM element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiBinding {
    pub element_id: &'static str,
    pub animation: CounterAnimation,
}

impl KpiTarget {
    /// Counters in page order, each starting from zero
    pub fn bindings(&self) -> [KpiBinding; 4] {
        [
            KpiBinding {
                element_id: constants::KPI_TOTAL_ID,
                animation: CounterAnimation::new(0, self.total, constants::KPI_TOTAL_DURATION_MS),
            },
            KpiBinding {
                element_id: constants::KPI_MALICIOUS_ID,
                animation: CounterAnimation::new(0, self.malicious, constants::KPI_MALICIOUS_DURATION_MS),
            },
            KpiBinding {
                element_id: constants::KPI_HARMLESS_ID,
                animation: CounterAnimation::new(0, self.harmless, constants::KPI_HARMLESS_DURATION_MS),
            },
            KpiBinding {
                element_id: constants::KPI_SUSPICIOUS_ID,
                animation: CounterAnimation::new(0, self.suspicious, constants::KPI_SUSPICIOUS_DURATION_MS),
            },
        ]
    }
}

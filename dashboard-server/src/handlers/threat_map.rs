//! Threat map handler
//!
//! Upstream failures never reach the client: the widget treats an empty
//! list as "no live data" and falls back to its demo set.

use axum::{extract::State, Json};

use crate::models::ThreatPoint;
use crate::AppState;

/// GET /api/threat-map
pub async fn list(State(state): State<AppState>) -> Json<Vec<ThreatPoint>> {
    match state.threat_intel.threat_points().await {
        Ok(points) => Json(points),
        Err(e) => {
            tracing::warn!("Threat map feed unavailable: {}", e);
            Json(Vec::new())
        }
    }
}

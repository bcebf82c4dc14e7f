//! Threat Map Module
//!
//! DOM-free half of the threat map: wire types, demo fallback, keyed diff,
//! projection, topology decoding and marker motion.
//!
//! ## Structure
//! - `types`: ThreatMarker, Risk, risk colors
//! - `demo`: fixed fallback dataset
//! - `source`: live/demo selection and stale-refresh tokens
//! - `diff`: keyed exit/update/enter split
//! - `projection`: Mercator sized to the viewport
//! - `topology`: TopoJSON → country polygons
//! - `path`: polygons → SVG path data
//! - `motion`: position tweens and pulse timing

pub mod types;
pub mod demo;
pub mod source;
pub mod diff;
pub mod projection;
pub mod topology;
pub mod path;
pub mod motion;

// Re-export main types for convenience
pub use types::{Risk, ThreatMarker, risk_color};
pub use demo::demo_threats;
pub use source::{DataMode, FetchError, RefreshGuard, RefreshToken, select_threats};
pub use diff::{MarkerDiff, diff_markers};
pub use projection::Mercator;
pub use topology::{AreaFeature, Topology, TopologyError};
pub use path::feature_path;
pub use motion::{PulseFrame, Tween, pulse_at, translate};

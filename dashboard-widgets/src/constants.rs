//! Central Configuration Constants
//!
//! Single source of truth for all widget defaults.
//! `DashboardConfig::default()` reads from here; the host page may override
//! a subset at mount time.

/// Threat feed served by `dashboard-server`
pub const DEFAULT_THREAT_ENDPOINT: &str = "/api/threat-map";

/// World boundary geometry (TopoJSON, 110m resolution)
pub const DEFAULT_WORLD_ATLAS_URL: &str =
    "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";

/// Name of the countries object inside the atlas topology
pub const WORLD_ATLAS_OBJECT: &str = "countries";

/// Threat refresh interval (milliseconds)
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 60_000;

/// Floor for host-supplied refresh intervals (milliseconds)
pub const MIN_REFRESH_INTERVAL_MS: u32 = 5_000;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// DOM contract
// ============================================

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const GLOBE_CONTAINER_ID: &str = "globe-container";
pub const GLOBE_CANVAS_ID: &str = "globe-canvas";

pub const KPI_TOTAL_ID: &str = "kpi-total";
pub const KPI_MALICIOUS_ID: &str = "kpi-mal";
pub const KPI_HARMLESS_ID: &str = "kpi-good";
pub const KPI_SUSPICIOUS_ID: &str = "kpi-susp";

pub const THREAT_MAP_ID: &str = "threat-map";
pub const WORLD_MAP_SVG_ID: &str = "world-map";
pub const THREAT_LAYER_ID: &str = "threat-layer";
pub const LIVE_BUTTON_ID: &str = "liveBtn";
pub const DEMO_BUTTON_ID: &str = "demoBtn";
pub const ACTIVE_CLASS: &str = "active";

pub const MODAL_ID: &str = "iocModal";
pub const MODAL_IP_ID: &str = "modal-ip";
pub const MODAL_COUNTRY_ID: &str = "modal-country";
pub const MODAL_RISK_ID: &str = "modal-risk";

pub const VIEW_TOGGLE_BUTTON_ID: &str = "mapToggleBtn";

/// Optional `<script type="application/json">` block with config overrides
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ============================================
// Globe
// ============================================

/// Canvas height (px); width follows the container
pub const GLOBE_HEIGHT: u32 = 420;

/// Gap between the sphere and the canvas edge (px)
pub const GLOBE_MARGIN: f64 = 20.0;

/// Rotation added per frame (radians)
pub const GLOBE_ROTATION_STEP: f64 = 0.002;

/// Number of rotating longitude ellipses
pub const GLOBE_LONGITUDES: usize = 6;

/// Latitudes drawn as fixed ellipses (degrees)
pub const GLOBE_LATITUDES: [f64; 5] = [-60.0, -30.0, 0.0, 30.0, 60.0];

pub const GLOBE_GLOW_INNER: &str = "rgba(59,130,246,0.35)";
pub const GLOBE_GLOW_OUTER: &str = "rgba(0,0,0,0)";
pub const GLOBE_BODY_INNER: &str = "#0b3b7a";
pub const GLOBE_BODY_OUTER: &str = "#020617";
pub const GLOBE_OUTLINE: &str = "rgba(59,130,246,0.6)";
pub const GLOBE_GRID: &str = "rgba(59,130,246,0.25)";

// ============================================
// KPI counters
// ============================================

/// Placeholder targets until KPIs come from the backend
pub const KPI_TOTAL: u64 = 248;
pub const KPI_MALICIOUS: u64 = 63;
pub const KPI_HARMLESS: u64 = 141;
pub const KPI_SUSPICIOUS: u64 = 44;

pub const KPI_TOTAL_DURATION_MS: f64 = 900.0;
pub const KPI_MALICIOUS_DURATION_MS: f64 = 800.0;
pub const KPI_HARMLESS_DURATION_MS: f64 = 1000.0;
pub const KPI_SUSPICIOUS_DURATION_MS: f64 = 850.0;

// ============================================
// Threat map
// ============================================

/// SVG height (px); width follows the container
pub const MAP_HEIGHT: u32 = 380;

/// Mercator scale divisor: scale = width / MAP_SCALE_DIVISOR
pub const MAP_SCALE_DIVISOR: f64 = 6.2;

/// Vertical translate divisor: ty = height / MAP_TRANSLATE_Y_DIVISOR
pub const MAP_TRANSLATE_Y_DIVISOR: f64 = 1.45;

pub const MAP_BACKGROUND: &str = "#020617";
pub const COUNTRY_FILL: &str = "#0b1d3a";
pub const COUNTRY_STROKE: &str = "#1e40af";
pub const COUNTRY_STROKE_WIDTH: f64 = 0.4;
pub const COUNTRY_OPACITY: f64 = 0.9;

pub const COLOR_MALICIOUS: &str = "#ef4444";
pub const COLOR_SUSPICIOUS: &str = "#f59e0b";
pub const COLOR_HARMLESS: &str = "#22c55e";

pub const MARKER_RADIUS: f64 = 4.0;
pub const MARKER_OPACITY: f64 = 0.95;

/// Marker reposition transition (ms)
pub const MARKER_MOVE_MS: f64 = 400.0;

pub const PULSE_START_RADIUS: f64 = 4.0;
pub const PULSE_END_RADIUS: f64 = 14.0;
pub const PULSE_START_OPACITY: f64 = 0.8;
pub const PULSE_STROKE_WIDTH: f64 = 2.0;

/// One expand-and-fade cycle (ms)
pub const PULSE_PERIOD_MS: f64 = 1500.0;

// ============================================
// View switcher labels
// ============================================

pub const LABEL_SWITCH_TO_MAP: &str = "Switch to Map";
pub const LABEL_SWITCH_TO_GLOBE: &str = "Switch to Globe";

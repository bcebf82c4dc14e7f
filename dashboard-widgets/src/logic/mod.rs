//! Logic Module - DOM-free widget behavior
//!
//! Everything here runs natively and is unit-tested without a browser.
//! The `widgets` module paints what these types compute.

pub mod config;
pub mod easing;
pub mod globe;
pub mod kpi;
pub mod scheduler;
pub mod theme;
pub mod threat;
pub mod view;

pub use config::DashboardConfig;
pub use scheduler::{Attachment, FrameTask, Tick};

//! Threat Dashboard Widgets - WebAssembly entry point
//!
//! Theme toggle, canvas globe, KPI counters, threat map and the
//! globe/map view switcher for the security dashboard page.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  api/      exported commands, page mounting              │
//! │  widgets/  DOM-bound widgets (canvas, SVG, listeners)    │
//! │  dom/      web-sys glue: frames, intervals, fetch        │
//! │  logic/    DOM-free behavior, unit-tested natively       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod constants;
pub mod dom;
pub mod error;
pub mod logging;
pub mod logic;
pub mod widgets;

use wasm_bindgen::prelude::*;

pub use error::{WidgetError, WidgetResult};

/// Module entry: logging, panic hook, then mount once the DOM is ready
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(document.as_ref(), "DOMContentLoaded", |_| api::mount_dashboard())?;
    } else {
        api::mount_dashboard();
    }
    Ok(())
}

//! JS-callable commands
//!
//! Functions exported to the host page through `wasm-bindgen`.

use wasm_bindgen::prelude::*;

use crate::constants;
use crate::dom;
use crate::error::{WidgetError, WidgetResult};
use crate::logic::DashboardConfig;
use crate::logic::theme::Theme;
use crate::widgets;

/// Widget crate version
#[wasm_bindgen]
pub fn version() -> String {
    constants::APP_VERSION.to_string()
}

/// Flip the page theme; returns the new value
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    Ok(widgets::theme_toggle::toggle()?.as_str().to_string())
}

/// Current page theme (`dark` when unset)
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> String {
    let attr = dom::document()
        .ok()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(constants::THEME_ATTRIBUTE));
    Theme::from_attribute(attr.as_deref()).as_str().to_string()
}

/// Configuration from the page's JSON config block, if any
pub fn page_config() -> WidgetResult<DashboardConfig> {
    let json = dom::by_id(constants::CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    DashboardConfig::from_json(json.as_deref()).map_err(WidgetError::from)
}

/// Mount every widget present on the page
pub fn mount_dashboard() {
    let config = match page_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring dashboard config: {}", e);
            DashboardConfig::default()
        }
    };
    log::info!("Mounting dashboard widgets v{}", constants::APP_VERSION);
    widgets::mount_all(&config);
}

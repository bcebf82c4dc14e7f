//! Theme toggle button

use crate::constants;
use crate::dom;
use crate::error::WidgetResult;
use crate::logic::theme::{next_theme, Theme};

/// Bind the toggle button, if the page has one
pub fn mount() -> WidgetResult<()> {
    let Some(button) = dom::by_id(constants::THEME_TOGGLE_ID) else {
        log::debug!("No #{} on page, theme toggle disabled", constants::THEME_TOGGLE_ID);
        return Ok(());
    };

    dom::listen(button.as_ref(), "click", |_| {
        if let Err(e) = toggle() {
            log::warn!("Theme toggle failed: {}", e);
        }
    })
}

/// Flip the root theme attribute and return the new value
pub fn toggle() -> WidgetResult<Theme> {
    let Some(root) = dom::document()?.document_element() else {
        return Ok(Theme::default());
    };
    let current = root.get_attribute(constants::THEME_ATTRIBUTE);
    let next = next_theme(current.as_deref());
    root.set_attribute(constants::THEME_ATTRIBUTE, next.as_str())?;
    log::debug!("Theme set to {}", next);
    Ok(next)
}

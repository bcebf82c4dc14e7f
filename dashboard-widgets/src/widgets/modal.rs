//! Marker detail dialog
//!
//! Uses Bootstrap's modal when the page loads Bootstrap; otherwise shows
//! the dialog element directly.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::constants;
use crate::dom;
use crate::error::WidgetResult;
use crate::logic::threat::ThreatMarker;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BootstrapModal;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Modal", catch)]
    fn new(element: &Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapModal);
}

/// Fill and open the dialog for `marker`
pub fn open(marker: &ThreatMarker) -> WidgetResult<()> {
    let Some(modal) = dom::by_id(constants::MODAL_ID) else {
        log::debug!("No #{} on page, marker click ignored", constants::MODAL_ID);
        return Ok(());
    };

    set_text(constants::MODAL_IP_ID, &marker.ip);
    set_text(constants::MODAL_COUNTRY_ID, &marker.country);
    set_text(constants::MODAL_RISK_ID, &marker.risk);

    match BootstrapModal::new(&modal) {
        Ok(dialog) => dialog.show(),
        Err(_) => {
            log::debug!("Bootstrap modal unavailable, showing dialog directly");
            show_plain(&modal)?;
        }
    }
    Ok(())
}

fn set_text(id: &str, text: &str) {
    if let Some(el) = dom::by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn show_plain(modal: &Element) -> WidgetResult<()> {
    modal.class_list().add_1("show")?;
    if let Some(el) = modal.dyn_ref::<HtmlElement>() {
        el.style().set_property("display", "block")?;
    }
    Ok(())
}

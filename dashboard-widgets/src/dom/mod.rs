//! Browser glue
//!
//! Thin wrappers over `web-sys` shared by the widgets: element lookup,
//! event listeners, animation frames, intervals and JSON fetch.
//!
//! `listen` is for elements that live as long as the page; widgets that can
//! be unmounted hold a `listener::Listener` instead.

pub mod fetch;
pub mod frame;
pub mod listener;
pub mod timer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::error::{WidgetError, WidgetResult};

pub fn window() -> WidgetResult<Window> {
    web_sys::window().ok_or(WidgetError::NoWindow)
}

pub fn document() -> WidgetResult<Document> {
    window()?.document().ok_or(WidgetError::NoDocument)
}

/// Element by id; `None` when absent (widgets treat that as "not on this page")
pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Element by id, cast to a concrete type
pub fn by_id_as<T: JsCast>(id: &'static str) -> WidgetResult<Option<T>> {
    match by_id(id) {
        Some(el) => el.dyn_into::<T>().map(Some).map_err(|_| WidgetError::WrongElementType(id)),
        None => Ok(None),
    }
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> WidgetResult<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Create an SVG element
pub fn svg_element(document: &Document, tag: &str) -> WidgetResult<Element> {
    Ok(document.create_element_ns(Some(crate::constants::SVG_NS), tag)?)
}

/// Set several attributes at once
pub fn set_attributes(element: &Element, attributes: &[(&str, String)]) -> WidgetResult<()> {
    for (name, value) in attributes {
        element.set_attribute(name, value)?;
    }
    Ok(())
}

/// Current time on the animation-frame clock
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

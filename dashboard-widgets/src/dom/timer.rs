//! setInterval wrapper

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::WidgetResult;

/// Repeating timer, cleared on drop
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F>(period_ms: u32, callback: F) -> WidgetResult<Self>
    where
        F: FnMut() + 'static,
    {
        let window = super::window()?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

//! requestAnimationFrame driver for `FrameTask`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::WidgetResult;
use crate::logic::{FrameTask, Tick};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Tick `task` once per display frame until it returns `Tick::Stop`.
///
/// The callback owns the task and re-arms itself; on stop it drops its own
/// closure so nothing is kept alive.
pub fn run<T>(mut task: T) -> WidgetResult<()>
where
    T: FrameTask + 'static,
{
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let handle = slot.clone();

    *handle.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        match task.tick(now) {
            Tick::Continue => {
                if let Err(e) = request(&slot) {
                    log::warn!("Animation frame request failed: {}", e);
                    slot.borrow_mut().take();
                }
            }
            Tick::Stop => {
                slot.borrow_mut().take();
            }
        }
    }));

    request(&handle)
}

fn request(slot: &Rc<RefCell<Option<FrameCallback>>>) -> WidgetResult<()> {
    let window = super::window()?;
    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}

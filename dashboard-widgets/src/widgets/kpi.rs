//! KPI counters

use web_sys::Element;

use crate::dom;
use crate::error::WidgetResult;
use crate::logic::easing::CounterAnimation;
use crate::logic::kpi::KpiTarget;
use crate::logic::Tick;

/// Start every counter whose element is on the page
pub fn mount(targets: &KpiTarget) -> WidgetResult<()> {
    for binding in targets.bindings() {
        match dom::by_id(binding.element_id) {
            Some(element) => animate(element, binding.animation)?,
            None => log::debug!("No #{} on page, counter skipped", binding.element_id),
        }
    }
    Ok(())
}

/// Count `element` up per `animation`, one step per display frame
pub fn animate(element: Element, animation: CounterAnimation) -> WidgetResult<()> {
    let mut started_at: Option<f64> = None;

    dom::frame::run(move |now: f64| {
        let start = *started_at.get_or_insert(now);
        let elapsed = now - start;
        element.set_text_content(Some(&animation.value_at(elapsed).to_string()));

        if animation.is_complete(elapsed) || !element.is_connected() {
            Tick::Stop
        } else {
            Tick::Continue
        }
    })
}

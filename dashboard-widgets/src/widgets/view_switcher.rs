//! Globe ⇄ map switch for the shared container

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::constants;
use crate::dom;
use crate::error::WidgetResult;
use crate::logic::view::{View, ViewSwitcher};
use crate::logic::DashboardConfig;
use super::{globe, threat_map};

/// Bind the switch button; needs both the button and the container
pub fn mount(config: &DashboardConfig) -> WidgetResult<()> {
    let (Some(button), Some(container)) = (
        dom::by_id(constants::VIEW_TOGGLE_BUTTON_ID),
        dom::by_id(constants::GLOBE_CONTAINER_ID),
    ) else {
        log::debug!("View switcher disabled (button or container missing)");
        return Ok(());
    };

    let switcher = Rc::new(RefCell::new(ViewSwitcher::new()));
    let config = config.clone();
    let target = button.clone();

    dom::listen(target.as_ref(), "click", move |_| {
        let view = switcher.borrow_mut().toggle();
        button.set_text_content(Some(view.button_label()));
        if let Err(e) = show(view, &container, &config) {
            log::warn!("Could not switch to {} view: {}", view.as_str(), e);
        }
    })
}

fn show(view: View, container: &Element, config: &DashboardConfig) -> WidgetResult<()> {
    container.set_inner_html("");
    match view {
        View::Globe => globe::mount(container, config),
        View::Map => threat_map::mount(container, config),
    }
}

//! Widgets - DOM-bound halves of each dashboard component
//!
//! Every widget degrades to a no-op when its elements are missing.

pub mod globe;
pub mod kpi;
pub mod modal;
pub mod theme_toggle;
pub mod threat_map;
pub mod view_switcher;

use crate::constants;
use crate::dom;
use crate::error::WidgetResult;
use crate::logic::DashboardConfig;

/// Mount every widget the page has elements for.
///
/// A failing widget is logged and does not stop the others.
pub fn mount_all(config: &DashboardConfig) {
    let results: [(&str, WidgetResult<()>); 5] = [
        ("theme toggle", theme_toggle::mount()),
        ("globe", mount_globe(config)),
        ("kpi", kpi::mount(&config.kpi)),
        ("threat map", threat_map::mount_on_page(config)),
        ("view switcher", view_switcher::mount(config)),
    ];

    for (name, result) in results {
        if let Err(e) = result {
            log::warn!("{} failed to mount: {}", name, e);
        }
    }
}

fn mount_globe(config: &DashboardConfig) -> WidgetResult<()> {
    match dom::by_id(constants::GLOBE_CONTAINER_ID) {
        Some(container) => globe::mount(&container, config),
        None => {
            log::debug!("No #{} on page, globe disabled", constants::GLOBE_CONTAINER_ID);
            Ok(())
        }
    }
}

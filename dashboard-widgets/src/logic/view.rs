//! View Switcher State
//!
//! Which widget currently occupies the shared globe container.

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Globe,
    Map,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Globe => "globe",
            View::Map => "map",
        }
    }

    pub fn other(self) -> Self {
        match self {
            View::Globe => View::Map,
            View::Map => View::Globe,
        }
    }

    /// Button label while this view is showing
    pub fn button_label(&self) -> &'static str {
        match self {
            View::Globe => constants::LABEL_SWITCH_TO_MAP,
            View::Map => constants::LABEL_SWITCH_TO_GLOBE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewSwitcher {
    current: View,
}

impl ViewSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Flip to the other view and return it
    pub fn toggle(&mut self) -> View {
        self.current = self.current.other();
        self.current
    }

    pub fn label(&self) -> &'static str {
        self.current.button_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_globe() {
        let switcher = ViewSwitcher::new();
        assert_eq!(switcher.current(), View::Globe);
        assert_eq!(switcher.label(), "Switch to Map");
    }

    #[test]
    fn test_two_clicks_round_trip() {
        let mut switcher = ViewSwitcher::new();

        assert_eq!(switcher.toggle(), View::Map);
        assert_eq!(switcher.label(), "Switch to Globe");

        assert_eq!(switcher.toggle(), View::Globe);
        assert_eq!(switcher.label(), "Switch to Map");
    }
}

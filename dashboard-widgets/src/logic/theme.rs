//! Theme State
//!
//! Dark/light flag stored as an attribute on the document root.
//! Attribute absent or unrecognized ⇒ dark.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse the root attribute value
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value to write back after one toggle click
pub fn next_theme(current: Option<&str>) -> Theme {
    Theme::from_attribute(current).toggled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::from_attribute(None), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("")), Theme::Dark);
        assert_eq!(Theme::from_attribute(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn test_first_click_goes_light() {
        assert_eq!(next_theme(None), Theme::Light);
        assert_eq!(next_theme(Some("light")), Theme::Dark);
    }

    #[test]
    fn test_click_parity() {
        for clicks in 0..12 {
            let mut attr: Option<String> = None;
            for _ in 0..clicks {
                attr = Some(next_theme(attr.as_deref()).as_str().to_string());
            }
            let theme = Theme::from_attribute(attr.as_deref());
            let expected = if clicks % 2 == 0 { Theme::Dark } else { Theme::Light };
            assert_eq!(theme, expected, "after {} clicks", clicks);
        }
    }
}

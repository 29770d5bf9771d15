// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Wizard,
    Guide,
    Preview,
    Settings,
}

impl Screen {
    /// Parses the `--screen` CLI flag value.
    #[must_use]
    pub fn from_flag(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "wizard" => Some(Screen::Wizard),
            "guide" => Some(Screen::Guide),
            "preview" => Some(Screen::Preview),
            "settings" => Some(Screen::Settings),
            _ => None,
        }
    }

    /// Window-title suffix for this screen.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Wizard => "Selection Wizard",
            Screen::Guide => "Framework Guide",
            Screen::Preview => "Pivot Preview",
            Screen::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flag_parses_known_screens_case_insensitively() {
        assert_eq!(Screen::from_flag("wizard"), Some(Screen::Wizard));
        assert_eq!(Screen::from_flag("GUIDE"), Some(Screen::Guide));
        assert_eq!(Screen::from_flag("Preview"), Some(Screen::Preview));
        assert_eq!(Screen::from_flag("settings"), Some(Screen::Settings));
    }

    #[test]
    fn from_flag_rejects_unknown_values() {
        assert_eq!(Screen::from_flag("editor"), None);
        assert_eq!(Screen::from_flag(""), None);
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::preferences::{Preference, PreferenceEffect};

/// Colour scheme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Code used in the storage slot and in the `data-theme` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Translation key of the button that switches *away* from this theme.
    pub fn toggle_label_key(&self) -> &'static str {
        match self {
            Theme::Light => "common.darkMode",
            Theme::Dark => "common.lightMode",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl Preference for Theme {
    const STORAGE_KEY: &'static str = "theme-storage";
    const FIELD: &'static str = "theme";

    fn effect(self) -> PreferenceEffect {
        PreferenceEffect::DarkMode(self.is_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggled_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn codes_parse_back() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_code(theme.code()), Some(theme));
        }
        assert_eq!(Theme::from_code("forest"), None);
    }

    #[test]
    fn effect_carries_dark_flag() {
        assert_eq!(Theme::Dark.effect(), PreferenceEffect::DarkMode(true));
        assert_eq!(Theme::Light.effect(), PreferenceEffect::DarkMode(false));
    }
}

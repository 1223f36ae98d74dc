use serde::{Deserialize, Serialize};

use crate::shared::preferences::{Preference, PreferenceEffect};

/// Interface language. Spanish is the primary audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    /// ISO 639-1 code, also used for `<html lang>`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Short label shown in the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Es, Language::En]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl Preference for Language {
    const STORAGE_KEY: &'static str = "language-storage";
    const FIELD: &'static str = "language";

    fn effect(self) -> PreferenceEffect {
        PreferenceEffect::Catalog(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_spanish() {
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn codes_parse_back() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("ES"), None);
    }
}

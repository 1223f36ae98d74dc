//! Static translation catalogs.
//!
//! Lookups fall back to the Spanish catalog and then to the key itself, so a
//! missing entry shows up as `pages.foo.bar` on screen instead of blank text.

mod en;
mod es;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::enums::Language;

/// Translations for one language.
#[derive(Debug)]
pub struct Catalog {
    language: Language,
    entries: HashMap<&'static str, &'static str>,
}

static ES: Lazy<Catalog> = Lazy::new(|| Catalog::build(Language::Es, es::ENTRIES));
static EN: Lazy<Catalog> = Lazy::new(|| Catalog::build(Language::En, en::ENTRIES));

impl Catalog {
    fn build(language: Language, entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            language,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn for_language(language: Language) -> &'static Catalog {
        match language {
            Language::Es => &ES,
            Language::En => &EN,
        }
    }

    /// Catalog used when a key is missing from the active one.
    pub fn fallback() -> &'static Catalog {
        Self::for_language(Language::default())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Entry for `key` in this catalog only.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match self.get(key).or_else(|| Self::fallback().get(key)) {
            Some(text) => text,
            None => key,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::routes::AppRoute;

    #[test]
    fn switches_with_language() {
        let es = Catalog::for_language(Language::Es);
        let en = Catalog::for_language(Language::En);
        assert_eq!(es.translate("sidebar.zones"), "Zonas");
        assert_eq!(en.translate("sidebar.zones"), "Zones");
        assert_eq!(en.language(), Language::En);
    }

    #[test]
    fn unknown_keys_echo_back() {
        let en = Catalog::for_language(Language::En);
        assert_eq!(en.translate("pages.unknown.title"), "pages.unknown.title");
    }

    #[test]
    fn catalogs_cover_the_same_keys() {
        let es = Catalog::for_language(Language::Es);
        let en = Catalog::for_language(Language::En);
        let mut es_keys: Vec<_> = es.keys().collect();
        let mut en_keys: Vec<_> = en.keys().collect();
        es_keys.sort_unstable();
        en_keys.sort_unstable();
        assert_eq!(es_keys, en_keys);
    }

    #[test]
    fn form_messages_are_translated() {
        use crate::shared::forms::{
            BENEFITS_REQUIRED, INVALID_EMAIL, INVALID_NUMBER, NEGATIVE_NUMBER, REQUIRED,
        };

        for language in Language::all() {
            let catalog = Catalog::for_language(language);
            for key in [REQUIRED, INVALID_EMAIL, INVALID_NUMBER, NEGATIVE_NUMBER, BENEFITS_REQUIRED]
            {
                assert!(catalog.get(key).is_some(), "{key} in {language:?}");
            }
        }
    }

    #[test]
    fn every_route_has_a_label() {
        for language in Language::all() {
            let catalog = Catalog::for_language(language);
            for route in AppRoute::all() {
                assert!(catalog.get(route.label_key()).is_some(), "{route:?} in {language:?}");
                assert!(catalog.get(route.page_title_key()).is_some(), "{route:?} in {language:?}");
            }
        }
    }

    #[test]
    fn theme_toggle_labels_exist() {
        use crate::enums::Theme;
        for theme in Theme::all() {
            assert!(Catalog::fallback().get(theme.toggle_label_key()).is_some());
        }
    }
}

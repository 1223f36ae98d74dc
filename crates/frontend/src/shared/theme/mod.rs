//! Reactive wrappers around the persisted theme and language preferences.
//!
//! [`PreferencesContext`] owns both stores. Setting a value goes through the
//! store (memory + `localStorage`) and then applies the returned effect:
//! the `dark` class on `<html>` and the thaw theme for [`Theme`], the active
//! [`Catalog`] and `<html lang>` for [`Language`].

mod theme_select;

pub use theme_select::{LanguageSelect, ThemeToggle};

use contracts::enums::{Language, Theme};
use contracts::shared::i18n::Catalog;
use contracts::shared::preferences::{PreferenceEffect, PreferenceStore};
use leptos::prelude::*;
use thaw::Theme as ThawTheme;
use web_sys::window;

use crate::shared::storage::BrowserStorage;

type Store<P> = PreferenceStore<P, BrowserStorage>;

/// Toggle the root-level `dark` class and mirror the theme on `<body>`.
fn apply_dark_mode(enabled: bool) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle_with_force("dark", enabled);
    }

    if let Some(body) = document.body() {
        let code = if enabled { Theme::Dark } else { Theme::Light }.code();
        let _ = body.set_attribute("data-theme", code);
    }
}

fn apply_document_language(language: Language) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", language.code());
    }
}

/// Theme and language preferences, provided at the root of the app.
#[derive(Clone, Copy)]
pub struct PreferencesContext {
    theme: RwSignal<Store<Theme>>,
    language: RwSignal<Store<Language>>,
    catalog: RwSignal<&'static Catalog>,
    /// Theme handed to thaw's `ConfigProvider`.
    pub thaw_theme: RwSignal<ThawTheme>,
}

impl PreferencesContext {
    /// Rehydrates both stores from `localStorage` and applies their effects.
    pub fn load() -> Self {
        let theme = Store::<Theme>::load(BrowserStorage);
        let language = Store::<Language>::load(BrowserStorage);
        let (theme_effect, language_effect) = (theme.effect(), language.effect());

        let ctx = Self {
            theme: RwSignal::new(theme),
            language: RwSignal::new(language),
            catalog: RwSignal::new(Catalog::fallback()),
            thaw_theme: RwSignal::new(ThawTheme::light()),
        };
        ctx.apply(theme_effect);
        ctx.apply(language_effect);
        ctx
    }

    pub fn theme(&self) -> Theme {
        self.theme.with(|store| store.get())
    }

    pub fn language(&self) -> Language {
        self.language.with(|store| store.get())
    }

    pub fn set_theme(&self, theme: Theme) {
        if let Some(change) = self.theme.try_update(|store| store.set(theme)) {
            self.apply(change.effect);
        }
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.with_untracked(|store| store.get()).toggled();
        self.set_theme(next);
    }

    pub fn set_language(&self, language: Language) {
        if let Some(change) = self.language.try_update(|store| store.set(language)) {
            self.apply(change.effect);
        }
    }

    /// Performs the environment mutation described by `effect`.
    pub fn apply(&self, effect: PreferenceEffect) {
        match effect {
            PreferenceEffect::DarkMode(enabled) => {
                apply_dark_mode(enabled);
                self.thaw_theme.set(if enabled {
                    ThawTheme::dark()
                } else {
                    ThawTheme::light()
                });
            }
            PreferenceEffect::Catalog(language) => {
                self.catalog.set(Catalog::for_language(language));
                apply_document_language(language);
            }
        }
        log::debug!("applied preference effect {:?}", effect);
    }

    pub fn i18n(&self) -> I18n {
        I18n {
            catalog: self.catalog.read_only(),
        }
    }
}

/// Reactive text lookup against the active catalog.
#[derive(Clone, Copy)]
pub struct I18n {
    catalog: ReadSignal<&'static Catalog>,
}

impl I18n {
    /// Translates `key`; re-runs the calling closure when the language changes.
    pub fn t(&self, key: &'static str) -> &'static str {
        self.catalog.get().translate(key)
    }

    pub fn t_untracked(&self, key: &'static str) -> &'static str {
        self.catalog.get_untracked().translate(key)
    }
}

pub fn use_preferences() -> PreferencesContext {
    use_context::<PreferencesContext>()
        .expect("PreferencesContext not found. Provide it from App.")
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not found. Provide it from App.")
}

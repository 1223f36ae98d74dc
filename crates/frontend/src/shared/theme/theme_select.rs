use contracts::enums::Language;
use leptos::prelude::*;

use super::{use_i18n, use_preferences};
use crate::shared::icons::icon;

/// Light/dark switch showing the icon of the theme it switches to.
#[component]
pub fn ThemeToggle(#[prop(optional)] class: &'static str) -> impl IntoView {
    let prefs = use_preferences();
    let i18n = use_i18n();
    let label = move || i18n.t(prefs.theme().toggle_label_key());

    view! {
        <button
            class=format!("icon-btn {class}")
            on:click=move |_| prefs.toggle_theme()
            aria-label=label
            title=label
        >
            {move || if prefs.theme().is_dark() { icon("sun") } else { icon("moon") }}
        </button>
    }
}

#[component]
pub fn LanguageSelect(#[prop(optional)] class: &'static str) -> impl IntoView {
    let prefs = use_preferences();
    let i18n = use_i18n();

    view! {
        <select
            class=format!("language-select {class}")
            aria-label=move || i18n.t("common.selectLanguage")
            prop:value=move || prefs.language().code()
            on:change=move |ev| {
                if let Some(language) = Language::from_code(&event_target_value(&ev)) {
                    prefs.set_language(language);
                }
            }
        >
            {Language::all()
                .into_iter()
                .map(|language| {
                    view! {
                        <option value=language.code() selected=move || prefs.language() == language>
                            {language.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

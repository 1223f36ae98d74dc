use contracts::shared::forms::filter_benefit_icons;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::theme::use_i18n;

/// Dropdown grid of benefit icons with a search box.
#[component]
pub fn IconPicker(value: Signal<String>, on_pick: Callback<String>) -> impl IntoView {
    let i18n = use_i18n();
    let expanded = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let close = move || {
        expanded.set(false);
        query.set(String::new());
    };

    view! {
        <div class="icon-picker">
            <button
                type="button"
                class="icon-picker__toggle"
                on:click=move |_| {
                    if expanded.get_untracked() { close() } else { expanded.set(true) }
                }
            >
                {move || icon(&value.get())}
                <span>
                    {move || {
                        let current = value.get();
                        if current.is_empty() {
                            i18n.t("pages.plans.form.selectIcon").to_string()
                        } else {
                            current
                        }
                    }}
                </span>
                {icon("chevron-down")}
            </button>
            <Show when=move || expanded.get()>
                <div class="icon-picker__panel">
                    <input
                        type="search"
                        class="form-input"
                        placeholder=move || i18n.t("pages.plans.form.searchIcon")
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    {move || {
                        let matches = filter_benefit_icons(&query.get());
                        if matches.is_empty() {
                            view! {
                                <div class="icon-picker__empty">
                                    {i18n.t("pages.plans.form.noIconsFound")}
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="icon-picker__grid">
                                    {matches
                                        .into_iter()
                                        .map(|name| view! {
                                            <button
                                                type="button"
                                                class="icon-picker__option"
                                                class:icon-picker__option--selected=move || value.get() == name
                                                title=name
                                                on:click=move |_| {
                                                    on_pick.run(name.to_string());
                                                    close();
                                                }
                                            >
                                                {icon(name)}
                                            </button>
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

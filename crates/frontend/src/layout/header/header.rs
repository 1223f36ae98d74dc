use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::{use_i18n, LanguageSelect, ThemeToggle};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let layout = ctx.layout;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <Show when=move || layout.with(|l| l.show_menu_button)>
                    <button
                        class="icon-btn header__menu"
                        aria-label=move || i18n.t("common.openMenu")
                        on:click=move |_| ctx.open()
                    >
                        {icon("menu")}
                    </button>
                </Show>
                <label class="header__search">
                    {icon("search")}
                    <input
                        type="search"
                        class="header__search-input"
                        placeholder=move || i18n.t("common.search")
                    />
                </label>
            </div>
            <div class="header__actions">
                <Show when=move || !ctx.is_mobile()>
                    <ThemeToggle />
                    <LanguageSelect />
                </Show>
                <button class="icon-btn" aria-label=move || i18n.t("common.notifications")>
                    {icon("bell")}
                </button>
                <div class="header__user">
                    <span class="header__avatar">{icon("users")}</span>
                    <div class="header__user-text">
                        <span class="header__user-name">{move || i18n.t("common.adminUser")}</span>
                        <span class="header__user-role">{move || i18n.t("common.administrator")}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

//! Sidebar with the primary navigation.
//!
//! Desktop: a rail that collapses to icons with hover tooltips.
//! Mobile: a full-width overlay with a backdrop, closed after each navigation.

use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::{use_i18n, LanguageSelect, ThemeToggle};

#[component]
fn NavItem(route: AppRoute) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let pathname = use_location().pathname;
    let layout = ctx.layout;

    let is_active = move || pathname.with(|path| route.is_active(path));

    view! {
        <A href=route.path() attr:class="app-sidebar__link">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                aria-current=move || is_active().then_some("page")
                on:click=move |_| ctx.close_if_mobile()
            >
                <div class="app-sidebar__item-content">
                    {icon(route.icon())}
                    <Show when=move || layout.with(|l| l.show_labels)>
                        <span>{move || i18n.t(route.label_key())}</span>
                    </Show>
                </div>
                <Show when=move || layout.with(|l| l.show_tooltips)>
                    <span class="app-sidebar__tooltip" role="tooltip">
                        {move || i18n.t(route.label_key())}
                    </span>
                </Show>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let layout = ctx.layout;

    let logout = move |_: leptos::ev::MouseEvent| {
        log::info!("logout requested");
        ctx.close_if_mobile();
    };

    view! {
        <Show when=move || layout.with(|l| l.show_backdrop)>
            <div class="app-sidebar__backdrop" on:click=move |_| ctx.close()></div>
        </Show>

        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--mobile=move || ctx.is_mobile()
            class:app-sidebar--collapsed=move || layout.with(|l| l.show_tooltips)
            class:hidden=move || !layout.with(|l| l.sidebar_visible)
            style:width=move || layout.with(|l| l.sidebar_width.clone())
        >
            <div class="app-sidebar__header">
                <Show when=move || layout.with(|l| l.show_labels)>
                    <span class="app-sidebar__title">{move || i18n.t("common.appName")}</span>
                </Show>
                <Show
                    when=move || ctx.is_mobile()
                    fallback=move || view! {
                        <button
                            class="icon-btn app-sidebar__collapse"
                            aria-label=move || i18n.t(if ctx.is_open() { "common.collapse" } else { "common.expand" })
                            on:click=move |_| ctx.toggle()
                        >
                            {move || if ctx.is_open() { icon("chevron-left") } else { icon("chevron-right") }}
                        </button>
                    }
                >
                    <button
                        class="icon-btn app-sidebar__close"
                        aria-label=move || i18n.t("common.closeMenu")
                        on:click=move |_| ctx.close()
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>

            <nav class="app-sidebar__content">
                {AppRoute::all()
                    .into_iter()
                    .map(|route| view! { <NavItem route=route /> })
                    .collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <Show when=move || ctx.is_mobile()>
                    <div class="app-sidebar__preferences">
                        <LanguageSelect />
                        <ThemeToggle />
                    </div>
                </Show>
                <button class="app-sidebar__item app-sidebar__logout" on:click=logout>
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <Show when=move || layout.with(|l| l.show_labels)>
                            <span>{move || i18n.t("common.logout")}</span>
                        </Show>
                    </div>
                </button>
            </div>
        </aside>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::PreferencesContext;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Theme and language are rehydrated before the first render.
    let preferences = PreferencesContext::load();
    provide_context(preferences);
    provide_context(preferences.i18n());

    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider theme=preferences.thaw_theme>
            <AppRoutes />
        </ConfigProvider>
    }
}

use leptos::prelude::*;

use crate::shared::theme::use_i18n;

/// PageHeader component - translated title/subtitle with an actions slot
#[component]
pub fn PageHeader(
    /// Translation key of the title
    title_key: &'static str,

    #[prop(optional)]
    subtitle_key: Option<&'static str>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || i18n.t(title_key)}</h1>
                    {subtitle_key.map(|key| view! {
                        <div class="page-header__subtitle">{move || i18n.t(key)}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|children| children())}
            </div>
        </div>
    }
}

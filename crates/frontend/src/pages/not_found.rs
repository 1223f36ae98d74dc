use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::PageHeader;
use crate::shared::theme::use_i18n;

#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page page--not-found">
            <PageHeader title_key="pages.notFound.title">
                <A href=AppRoute::Dashboard.path()>{move || i18n.t("pages.notFound.back")}</A>
            </PageHeader>
        </div>
    }
}

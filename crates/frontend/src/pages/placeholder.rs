use contracts::shared::routes::AppRoute;
use leptos::prelude::*;

use crate::shared::components::PageHeader;

/// Title-only page for sections without content yet.
#[component]
#[allow(non_snake_case)]
pub fn PlaceholderPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader
                title_key=route.page_title_key()
                subtitle_key="pages.placeholder.subtitle"
            />
        </div>
    }
}

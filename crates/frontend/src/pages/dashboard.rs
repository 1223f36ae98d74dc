use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::theme::use_i18n;

#[component]
#[allow(non_snake_case)]
pub fn DashboardPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page">
            <PageHeader
                title_key=AppRoute::Dashboard.page_title_key()
                subtitle_key="pages.dashboard.subtitle"
            />
            <Flex class="dashboard__shortcuts" gap=FlexGap::Large>
                {[AppRoute::Zones, AppRoute::Plans]
                    .into_iter()
                    .map(|route| view! {
                        <a href=route.path() class="dashboard__shortcut">
                            <Card>
                                <Flex align=FlexAlign::Center>
                                    {icon(route.icon())}
                                    <span>{move || i18n.t(route.label_key())}</span>
                                </Flex>
                            </Card>
                        </a>
                    })
                    .collect_view()}
            </Flex>
        </div>
    }
}

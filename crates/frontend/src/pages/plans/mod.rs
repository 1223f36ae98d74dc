mod dialog;

use contracts::shared::api::ApiResource;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{PageHeader, ResourceList};
use crate::shared::icons::icon;
use crate::shared::theme::use_i18n;
use dialog::PlanDialog;

/// Plans are created and deleted; the backend has no update for them.
#[component]
#[allow(non_snake_case)]
pub fn PlansPage() -> impl IntoView {
    let i18n = use_i18n();
    let dialog_open = RwSignal::new(false);
    let refresh = RwSignal::new(0u32);

    view! {
        <div class="page">
            <PageHeader
                title_key=AppRoute::Plans.page_title_key()
                subtitle_key="pages.plans.subtitle"
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog_open.set(true)>
                    {icon("plus")}
                    {move || i18n.t("pages.plans.createPlan")}
                </Button>
            </PageHeader>
            <ResourceList resource=ApiResource::Plans empty_key="pages.plans.empty" refresh=refresh />
            <PlanDialog
                open=dialog_open
                on_saved=Callback::new(move |_| refresh.update(|n| *n += 1))
            />
        </div>
    }
}

mod dialog;

use contracts::shared::api::ApiResource;
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::components::{PageHeader, ResourceList};
use crate::shared::icons::icon;
use crate::shared::theme::use_i18n;
use dialog::ZoneDialog;

#[component]
#[allow(non_snake_case)]
pub fn ZonesPage() -> impl IntoView {
    let i18n = use_i18n();
    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<Value>);
    let refresh = RwSignal::new(0u32);

    let handle_create = move |_| {
        editing.set(None);
        dialog_open.set(true);
    };

    let handle_edit = Callback::new(move |record: Value| {
        editing.set(Some(record));
        dialog_open.set(true);
    });

    view! {
        <div class="page">
            <PageHeader
                title_key=AppRoute::Zones.page_title_key()
                subtitle_key="pages.zones.subtitle"
            >
                <Button appearance=ButtonAppearance::Primary on_click=handle_create>
                    {icon("plus")}
                    {move || i18n.t("pages.zones.createZone")}
                </Button>
            </PageHeader>
            <ResourceList
                resource=ApiResource::Zones
                empty_key="pages.zones.empty"
                refresh=refresh
                on_edit=handle_edit
            />
            <ZoneDialog
                open=dialog_open
                editing=editing
                on_saved=Callback::new(move |_| refresh.update(|n| *n += 1))
            />
        </div>
    }
}

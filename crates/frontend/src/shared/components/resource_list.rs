use contracts::shared::api::{record_id, record_name, ApiMethod, ApiResource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::shared::api_utils::{delete_record, fetch_records};
use crate::shared::icons::icon;
use crate::shared::theme::use_i18n;

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Loading,
    Failed,
    Ready(Vec<Value>),
}

/// Generic list of backend records showing id and name, with edit and delete.
#[component]
#[allow(non_snake_case)]
pub fn ResourceList(
    resource: ApiResource,
    /// Translation key shown when the list is empty
    empty_key: &'static str,
    /// Bumped by the owner after a create/update to reload the list
    #[prop(optional)]
    refresh: Option<RwSignal<u32>>,
    /// Opens the edit dialog; the button is hidden when the resource has no `PUT`
    #[prop(optional)]
    on_edit: Option<Callback<Value>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let state = RwSignal::new(LoadState::Loading);
    let delete_failed = RwSignal::new(false);

    let fetch = move || {
        state.set(LoadState::Loading);
        spawn_local(async move {
            match fetch_records(resource).await {
                Ok(records) => state.set(LoadState::Ready(records)),
                Err(e) => {
                    log::error!("failed to load {:?}: {}", resource, e);
                    state.set(LoadState::Failed);
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(i18n.t_untracked("common.confirmDelete"))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_record(resource, &id).await {
                Ok(()) => {
                    delete_failed.set(false);
                    fetch();
                }
                Err(e) => {
                    log::error!("failed to delete {:?} {}: {}", resource, id, e);
                    delete_failed.set(true);
                }
            }
        });
    };

    Effect::new(move |_| {
        if let Some(refresh) = refresh {
            refresh.track();
        }
        fetch();
    });

    let on_edit = on_edit.filter(|_| resource.supports(ApiMethod::Put));

    let render_rows = move |records: Vec<Value>| {
        records
            .into_iter()
            .map(|record| {
                let id = record_id(&record);
                let name = record_name(&record).unwrap_or("-").to_string();
                let id_label = id.clone().unwrap_or_default();
                let edit_button = on_edit.map(|on_edit| {
                    let record = record.clone();
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_edit.run(record.clone())
                        >
                            {move || i18n.t("common.edit")}
                        </Button>
                    }
                });
                view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                    {id_label}
                                </Badge>
                            </TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{name}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>
                                {edit_button}
                                {id.map(|id| view! {
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| handle_delete(id.clone())
                                    >
                                        {icon("trash")}
                                        {move || i18n.t("common.delete")}
                                    </Button>
                                })}
                            </TableCellLayout>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <div class="resource-list">
            <Show when=move || delete_failed.get()>
                <div class="resource-list__error">{move || i18n.t("common.deleteError")}</div>
            </Show>

            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="resource-list__status">
                        <Spinner />
                        <span>{move || i18n.t("common.loading")}</span>
                    </div>
                }
                .into_any(),
                LoadState::Failed => view! {
                    <div class="resource-list__error">{move || i18n.t("common.loadError")}</div>
                }
                .into_any(),
                LoadState::Ready(records) if records.is_empty() => view! {
                    <div class="resource-list__status">{move || i18n.t(empty_key)}</div>
                }
                .into_any(),
                LoadState::Ready(records) => {
                    let total = records.len();
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell min_width=120.0>{move || i18n.t("common.id")}</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=200.0>{move || i18n.t("common.name")}</TableHeaderCell>
                                    <TableHeaderCell min_width=100.0>{move || i18n.t("common.actions")}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>{render_rows(records)}</TableBody>
                        </Table>
                        <div class="resource-list__total">
                            {move || i18n.t("common.total")}": "{total}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

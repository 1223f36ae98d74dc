use contracts::shared::api::{record_id, ApiResource};
use contracts::shared::forms::{FormErrors, ZoneDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use crate::shared::api_utils::{create_record, update_record};
use crate::shared::components::FormField;
use crate::shared::theme::use_i18n;

/// Create/edit dialog for a zone. `editing` holds the record being edited,
/// `None` for a new zone.
#[component]
pub fn ZoneDialog(
    open: RwSignal<bool>,
    editing: RwSignal<Option<Value>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let free_installation = RwSignal::new(false);
    let no_commitment = RwSignal::new(false);
    let is_active = RwSignal::new(true);

    let errors = RwSignal::new(FormErrors::new());
    let submitted = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let save_failed = RwSignal::new(false);

    let draft = move || ZoneDraft {
        name: name.get(),
        description: description.get(),
        latitude: latitude.get(),
        longitude: longitude.get(),
        phone: phone.get(),
        email: email.get(),
        address: address.get(),
        free_installation: free_installation.get(),
        no_commitment: no_commitment.get(),
        is_active: is_active.get(),
    };

    // Load the edited record (or blanks) each time the dialog opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let loaded = editing
            .with_untracked(|record| record.as_ref().map(ZoneDraft::from_record))
            .unwrap_or_default();
        name.set(loaded.name);
        description.set(loaded.description);
        latitude.set(loaded.latitude);
        longitude.set(loaded.longitude);
        phone.set(loaded.phone);
        email.set(loaded.email);
        address.set(loaded.address);
        free_installation.set(loaded.free_installation);
        no_commitment.set(loaded.no_commitment);
        is_active.set(loaded.is_active);
        errors.set(FormErrors::new());
        submitted.set(false);
        save_failed.set(false);
    });

    // After the first submit, messages follow the input
    Effect::new(move |_| {
        if submitted.get() {
            errors.set(draft().validate());
        }
    });

    let handle_save = move |_| {
        submitted.set(true);
        let payload = match draft().to_payload() {
            Ok(payload) => payload,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };

        let target = editing.with_untracked(|record| record.as_ref().and_then(record_id));
        saving.set(true);
        save_failed.set(false);
        spawn_local(async move {
            let result = match &target {
                Some(id) => update_record(ApiResource::Zones, id, &payload).await,
                None => create_record(ApiResource::Zones, &payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save zone {:?}: {}", target, e);
                    save_failed.set(true);
                }
            }
        });
    };

    let title = move || {
        let key = if editing.with(Option::is_some) {
            "pages.zones.editZone"
        } else {
            "pages.zones.createZone"
        };
        i18n.t(key)
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <div class="entity-form">
                            <FormField field="name" errors=errors label_key="pages.zones.form.name">
                                <Input value=name />
                            </FormField>
                            <FormField field="description" errors=errors label_key="pages.zones.form.description">
                                <Textarea value=description />
                            </FormField>
                            <div class="entity-form__row">
                                <FormField field="latitude" errors=errors label_key="pages.zones.form.latitude">
                                    <Input value=latitude />
                                </FormField>
                                <FormField field="longitude" errors=errors label_key="pages.zones.form.longitude">
                                    <Input value=longitude />
                                </FormField>
                            </div>
                            <div class="entity-form__row">
                                <FormField field="phone" errors=errors label_key="pages.zones.form.phone">
                                    <Input value=phone />
                                </FormField>
                                <FormField field="email" errors=errors label_key="pages.zones.form.email">
                                    <Input value=email />
                                </FormField>
                            </div>
                            <FormField field="address" errors=errors label_key="pages.zones.form.address">
                                <Input value=address />
                            </FormField>
                            <div class="entity-form__checks">
                                <label class="form-check">
                                    <Checkbox checked=free_installation />
                                    <span>{move || i18n.t("pages.zones.form.freeInstallation")}</span>
                                </label>
                                <label class="form-check">
                                    <Checkbox checked=no_commitment />
                                    <span>{move || i18n.t("pages.zones.form.noCommitment")}</span>
                                </label>
                                <label class="form-check">
                                    <Checkbox checked=is_active />
                                    <span>{move || i18n.t("pages.zones.form.isActive")}</span>
                                </label>
                            </div>
                            <Show when=move || save_failed.get()>
                                <div class="resource-list__error">{move || i18n.t("common.saveError")}</div>
                            </Show>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            {move || i18n.t("common.cancel")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=handle_save
                        >
                            {move || i18n.t("common.save")}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

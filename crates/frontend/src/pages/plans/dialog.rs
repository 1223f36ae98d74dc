use contracts::shared::api::{record_id, record_name, ApiResource};
use contracts::shared::forms::{BenefitDraft, FormErrors, PlanDraft, SpeedUnit};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::{create_record, fetch_records};
use crate::shared::components::{FormField, IconPicker};
use crate::shared::icons::icon;
use crate::shared::theme::use_i18n;

#[component]
pub fn PlanDialog(open: RwSignal<bool>, on_saved: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();

    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let speed = RwSignal::new(String::new());
    let speed_unit = RwSignal::new(SpeedUnit::default().code().to_string());
    let zone_id = RwSignal::new(String::new());
    let benefits = RwSignal::new(Vec::<BenefitDraft>::new());
    let is_active = RwSignal::new(true);
    let is_recommended = RwSignal::new(false);
    // (id, name) of the zones a plan can belong to
    let zones = RwSignal::new(Vec::<(String, String)>::new());

    let errors = RwSignal::new(FormErrors::new());
    let submitted = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let save_failed = RwSignal::new(false);

    // Rows are rebuilt only when a benefit is added or removed, not on
    // every keystroke inside one.
    let benefit_count = Memo::new(move |_| benefits.with(Vec::len));

    let draft = move || PlanDraft {
        name: name.get(),
        price: price.get(),
        speed: speed.get(),
        speed_unit: SpeedUnit::from_code(&speed_unit.get()).unwrap_or_default(),
        benefits: benefits.get(),
        is_active: is_active.get(),
        is_recommended: is_recommended.get(),
        zone_id: zone_id.get(),
    };

    let load = move |loaded: PlanDraft| {
        name.set(loaded.name);
        price.set(loaded.price);
        speed.set(loaded.speed);
        speed_unit.set(loaded.speed_unit.code().to_string());
        zone_id.set(loaded.zone_id);
        benefits.set(loaded.benefits);
        is_active.set(loaded.is_active);
        is_recommended.set(loaded.is_recommended);
    };

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        load(PlanDraft::default());
        errors.set(FormErrors::new());
        submitted.set(false);
        save_failed.set(false);

        spawn_local(async move {
            match fetch_records(ApiResource::Zones).await {
                Ok(records) => {
                    let options: Vec<(String, String)> = records
                        .iter()
                        .filter_map(|record| {
                            let id = record_id(record)?;
                            let label = record_name(record).unwrap_or(&id).to_string();
                            Some((id, label))
                        })
                        .collect();
                    if zone_id.get_untracked().is_empty() {
                        let first = PlanDraft::for_zone(options.first().map(|(id, _)| id.clone()));
                        zone_id.set(first.zone_id);
                    }
                    zones.set(options);
                }
                Err(e) => log::error!("failed to load zones for the plan form: {}", e),
            }
        });
    });

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

        saving.set(true);
        save_failed.set(false);
        spawn_local(async move {
            let result = create_record(ApiResource::Plans, &payload).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to create plan: {}", e);
                    save_failed.set(true);
                }
            }
        });
    };

    let add_benefit = move |_| benefits.update(|items| items.push(BenefitDraft::default()));

    let remove_benefit = move |index: usize| {
        benefits.update(|items| {
            if index < items.len() {
                items.remove(index);
            }
        })
    };

    let benefit_row = move |index: usize| {
        let icon_value = Signal::derive(move || {
            benefits.with(|items| items.get(index).map(|b| b.icon.clone()).unwrap_or_default())
        });
        let pick_icon = Callback::new(move |picked: String| {
            benefits.update(|items| {
                if let Some(benefit) = items.get_mut(index) {
                    benefit.icon = picked;
                }
            })
        });

        view! {
            <div class="benefit-row">
                <FormField field=format!("benefits.{index}.icon") errors=errors>
                    <IconPicker value=icon_value on_pick=pick_icon />
                </FormField>
                <FormField field=format!("benefits.{index}.description") errors=errors>
                    <input
                        type="text"
                        class="form-input"
                        placeholder=move || i18n.t("pages.plans.form.benefitDescription")
                        prop:value=move || {
                            benefits.with(|items| {
                                items.get(index).map(|b| b.description.clone()).unwrap_or_default()
                            })
                        }
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            benefits.update(|items| {
                                if let Some(benefit) = items.get_mut(index) {
                                    benefit.description = text;
                                }
                            })
                        }
                    />
                </FormField>
                <button
                    type="button"
                    class="icon-btn"
                    aria-label=move || i18n.t("pages.plans.form.removeBenefit")
                    on:click=move |_| remove_benefit(index)
                >
                    {icon("trash")}
                </button>
            </div>
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || i18n.t("pages.plans.createPlan")}</DialogTitle>
                    <DialogContent>
                        <div class="entity-form">
                            <FormField field="name" errors=errors label_key="pages.plans.form.name">
                                <Input value=name />
                            </FormField>
                            <div class="entity-form__row">
                                <FormField field="price" errors=errors label_key="pages.plans.form.price">
                                    <Input value=price />
                                </FormField>
                                <FormField field="speed" errors=errors label_key="pages.plans.form.speed">
                                    <Input value=speed />
                                </FormField>
                                <FormField field="speedUnit" errors=errors label_key="pages.plans.form.speedUnit">
                                    <Select value=speed_unit>
                                        {SpeedUnit::all()
                                            .into_iter()
                                            .map(|unit| view! { <option value=unit.code()>{unit.code()}</option> })
                                            .collect_view()}
                                    </Select>
                                </FormField>
                            </div>
                            <FormField field="zoneId" errors=errors label_key="pages.plans.form.zone">
                                <Select value=zone_id>
                                    {move || zones
                                        .get()
                                        .into_iter()
                                        .map(|(id, label)| view! { <option value=id>{label}</option> })
                                        .collect_view()}
                                </Select>
                            </FormField>
                            <FormField field="benefits" errors=errors label_key="pages.plans.form.benefits">
                                <div class="benefit-list">
                                    {move || (0..benefit_count.get()).map(benefit_row).collect_view()}
                                </div>
                                <Button appearance=ButtonAppearance::Subtle on_click=add_benefit>
                                    {icon("plus")}
                                    {move || i18n.t("pages.plans.form.addBenefit")}
                                </Button>
                            </FormField>
                            <div class="entity-form__checks">
                                <label class="form-check">
                                    <Checkbox checked=is_active />
                                    <span>{move || i18n.t("pages.plans.form.isActive")}</span>
                                </label>
                                <label class="form-check">
                                    <Checkbox checked=is_recommended />
                                    <span>{move || i18n.t("pages.plans.form.isRecommended")}</span>
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

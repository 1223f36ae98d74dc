use contracts::shared::forms::FormErrors;
use leptos::prelude::*;

use crate::shared::theme::use_i18n;

/// Labelled form control with its inline validation message.
#[component]
pub fn FormField(
    /// Path looked up in `errors`, e.g. `name` or `benefits.0.description`
    #[prop(into)]
    field: String,
    errors: RwSignal<FormErrors>,
    #[prop(optional)]
    label_key: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();
    let field = StoredValue::new(field);
    let message = move || field.with_value(|field| errors.with(|errors| errors.get(field)));

    view! {
        <div class="form-field" class:form-field--invalid=move || message().is_some()>
            {label_key.map(|key| view! {
                <label class="form-field__label">{move || i18n.t(key)}</label>
            })}
            {children()}
            {move || message().map(|key| view! {
                <span class="form-field__error" role="alert">{i18n.t(key)}</span>
            })}
        </div>
    }
}

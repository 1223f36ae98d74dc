//! Create/edit form drafts for zones and plans.
//!
//! A draft holds the raw text of every input. `validate` reports field
//! errors as translation keys, keyed by field path (`name`,
//! `benefits.1.description`); `to_payload` only succeeds on a clean draft,
//! which is what keeps invalid forms from being submitted.

mod plan;
mod zone;

pub use plan::{filter_benefit_icons, BenefitDraft, PlanDraft, SpeedUnit, BENEFIT_ICONS};
pub use zone::ZoneDraft;

use std::collections::BTreeMap;

use serde_json::Value;

pub const REQUIRED: &str = "forms.required";
pub const INVALID_EMAIL: &str = "forms.invalidEmail";
pub const INVALID_NUMBER: &str = "forms.invalidNumber";
pub const NEGATIVE_NUMBER: &str = "forms.nonNegative";
pub const BENEFITS_REQUIRED: &str = "forms.benefitsRequired";

/// Field path to the translation key of its message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, &'static str>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message_key: &'static str) {
        self.0.insert(field.into(), message_key);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn text_of(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

fn flag_of(record: &Value, field: &str, default: bool) -> bool {
    match record.get(field) {
        Some(Value::Bool(flag)) => *flag,
        // some backends store flags as 0/1
        Some(Value::Number(number)) => number.as_i64().map_or(default, |n| n != 0),
        _ => default,
    }
}

fn require(errors: &mut FormErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED);
    }
}

/// Optional number: blank is `None`, garbage is an error.
fn optional_number(errors: &mut FormErrors, field: &str, value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            errors.insert(field, INVALID_NUMBER);
            None
        }
    }
}

fn non_negative_number(errors: &mut FormErrors, field: &str, value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => number,
        Ok(number) if number.is_finite() => {
            errors.insert(field, NEGATIVE_NUMBER);
            0.0
        }
        _ => {
            errors.insert(field, INVALID_NUMBER);
            0.0
        }
    }
}

fn number_value(number: f64) -> Value {
    serde_json::Number::from_f64(number).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        let mut errors = FormErrors::new();
        assert_eq!(optional_number(&mut errors, "lat", " "), None);
        assert_eq!(optional_number(&mut errors, "lat", "-12.5"), Some(-12.5));
        assert!(errors.is_empty());

        assert_eq!(optional_number(&mut errors, "lat", "north"), None);
        assert_eq!(non_negative_number(&mut errors, "price", "-1"), 0.0);
        assert_eq!(non_negative_number(&mut errors, "speed", ""), 0.0);
        assert_eq!(errors.get("lat"), Some(INVALID_NUMBER));
        assert_eq!(errors.get("price"), Some(NEGATIVE_NUMBER));
        assert_eq!(errors.get("speed"), Some(INVALID_NUMBER));
    }

    #[test]
    fn flags_accept_bools_and_integers() {
        let record = serde_json::json!({ "a": true, "b": 0, "c": 1, "d": "yes" });
        assert!(flag_of(&record, "a", false));
        assert!(!flag_of(&record, "b", true));
        assert!(flag_of(&record, "c", false));
        assert!(flag_of(&record, "d", true));
        assert!(!flag_of(&record, "missing", false));
    }
}

use serde_json::{Map, Value};

use super::{Preference, StorageError};

/// Serializes `value` as `{"state":{"<field>":<value>}}`.
pub fn encode_slot<P: Preference>(value: P) -> Result<String, StorageError> {
    let mut state = Map::new();
    state.insert(P::FIELD.to_string(), serde_json::to_value(value)?);

    let mut root = Map::new();
    root.insert("state".to_string(), Value::Object(state));

    Ok(serde_json::to_string(&Value::Object(root))?)
}

/// Parses a slot written by [`encode_slot`].
///
/// Returns `None` for malformed JSON, a missing `state` object, a missing
/// field, or a value outside the enum. Never panics.
pub fn decode_slot<P: Preference>(raw: &str) -> Option<P> {
    let root: Value = serde_json::from_str(raw).ok()?;
    let field = root.get("state")?.get(P::FIELD)?.clone();
    serde_json::from_value(field).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Language, Theme};

    #[test]
    fn encodes_the_state_envelope() {
        let raw = encode_slot(Theme::Dark).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, serde_json::json!({ "state": { "theme": "dark" } }));

        let raw = encode_slot(Language::En).unwrap();
        assert_eq!(raw, r#"{"state":{"language":"en"}}"#);
    }

    #[test]
    fn decodes_slots_with_extra_fields() {
        // Older builds also persisted a version number next to `state`.
        let raw = r#"{"state":{"theme":"dark","other":1},"version":0}"#;
        assert_eq!(decode_slot::<Theme>(raw), Some(Theme::Dark));
    }

    #[test]
    fn rejects_corrupted_slots() {
        let cases = [
            "",
            "not json",
            "{",
            "null",
            "[]",
            r#"{"theme":"dark"}"#,
            r#"{"state":null}"#,
            r#"{"state":{}}"#,
            r#"{"state":{"theme":"forest"}}"#,
            r#"{"state":{"theme":"DARK"}}"#,
            r#"{"state":{"theme":1}}"#,
            r#"{"state":{"language":"en"}}"#,
        ];
        for raw in cases {
            assert_eq!(decode_slot::<Theme>(raw), None, "input: {raw:?}");
        }
    }

    #[test]
    fn field_names_do_not_leak_between_preferences() {
        let raw = encode_slot(Theme::Dark).unwrap();
        assert_eq!(decode_slot::<Language>(&raw), None);
    }
}

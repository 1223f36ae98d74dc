//! REST resources consumed by the dashboard.
//!
//! Only the transport surface lives here (paths, verbs, response shapes);
//! record contents are passed through as JSON.

use serde_json::Value;

/// Default backend when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiResource {
    Zones,
    Plans,
}

impl ApiResource {
    pub fn collection_path(&self) -> &'static str {
        match self {
            ApiResource::Zones => "/zones",
            ApiResource::Plans => "/plans",
        }
    }

    /// Path of one record. The caller is responsible for URL-encoding `id`.
    pub fn item_path(&self, encoded_id: &str) -> String {
        format!("{}/{}", self.collection_path(), encoded_id)
    }

    /// Field holding the record array when the backend wraps it,
    /// e.g. `{"version":3,"zones":[...]}`.
    pub fn envelope_field(&self) -> &'static str {
        match self {
            ApiResource::Zones => "zones",
            ApiResource::Plans => "plans",
        }
    }

    /// Plans cannot be edited in place; they are deleted and recreated.
    pub fn supports(&self, method: ApiMethod) -> bool {
        !matches!((self, method), (ApiResource::Plans, ApiMethod::Put))
    }

    /// Extracts the record list from a collection response.
    ///
    /// Accepts a bare array or an object carrying the array under
    /// [`envelope_field`](Self::envelope_field). Anything else is `None`.
    pub fn records_from(&self, body: Value) -> Option<Vec<Value>> {
        match body {
            Value::Array(items) => Some(items),
            Value::Object(mut map) => match map.remove(self.envelope_field()) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            },
            _ => None,
        }
    }
}

/// `id` of a record as text, accepting string or numeric ids.
pub fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Display name of a record, if it carries one.
pub fn record_name(record: &Value) -> Option<&str> {
    record.get("name")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paths() {
        assert_eq!(ApiResource::Zones.collection_path(), "/zones");
        assert_eq!(ApiResource::Plans.item_path("p%201"), "/plans/p%201");
    }

    #[test]
    fn plans_have_no_update() {
        for method in [ApiMethod::Get, ApiMethod::Post, ApiMethod::Put, ApiMethod::Delete] {
            assert!(ApiResource::Zones.supports(method), "{method:?}");
        }
        assert!(!ApiResource::Plans.supports(ApiMethod::Put));
        assert!(ApiResource::Plans.supports(ApiMethod::Post));
        assert!(ApiResource::Plans.supports(ApiMethod::Delete));
    }

    #[test]
    fn unwraps_envelope_and_bare_arrays() {
        let wrapped = json!({ "version": 2, "zones": [{ "id": "z1" }] });
        assert_eq!(ApiResource::Zones.records_from(wrapped).map(|r| r.len()), Some(1));

        let bare = json!([{ "id": "p1" }, { "id": "p2" }]);
        assert_eq!(ApiResource::Plans.records_from(bare).map(|r| r.len()), Some(2));
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert_eq!(ApiResource::Zones.records_from(json!({ "version": 1 })), None);
        assert_eq!(ApiResource::Zones.records_from(json!({ "zones": {} })), None);
        assert_eq!(ApiResource::Plans.records_from(json!("nope")), None);
    }

    #[test]
    fn reads_ids_and_names() {
        let record = json!({ "id": 7, "name": "Centro" });
        assert_eq!(record_id(&record).as_deref(), Some("7"));
        assert_eq!(record_name(&record), Some("Centro"));
        assert_eq!(record_id(&json!({ "id": null })), None);
        assert_eq!(record_name(&json!({})), None);
    }
}

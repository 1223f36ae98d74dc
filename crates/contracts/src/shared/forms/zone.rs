use serde_json::{json, Value};

use super::{
    flag_of, number_value, optional_number, require, text_of, FormErrors, INVALID_EMAIL,
};

/// Raw input of the zone dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDraft {
    pub name: String,
    pub description: String,
    pub latitude: String,
    pub longitude: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub free_installation: bool,
    pub no_commitment: bool,
    pub is_active: bool,
}

impl Default for ZoneDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            free_installation: false,
            no_commitment: false,
            is_active: true,
        }
    }
}

/// Loose `local@domain.tld` check; the backend has the final word.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

impl ZoneDraft {
    /// Prefills the dialog from a record returned by `GET /zones`.
    pub fn from_record(record: &Value) -> Self {
        let defaults = Self::default();
        Self {
            name: text_of(record, "name"),
            description: text_of(record, "description"),
            latitude: text_of(record, "latitude"),
            longitude: text_of(record, "longitude"),
            phone: text_of(record, "phone"),
            email: text_of(record, "email"),
            address: text_of(record, "address"),
            free_installation: flag_of(record, "freeInstallation", defaults.free_installation),
            no_commitment: flag_of(record, "noCommitment", defaults.no_commitment),
            is_active: flag_of(record, "isActive", defaults.is_active),
        }
    }

    pub fn validate(&self) -> FormErrors {
        self.build().1
    }

    /// JSON body for `POST /zones` and `PUT /zones/{id}`.
    pub fn to_payload(&self) -> Result<Value, FormErrors> {
        match self.build() {
            (payload, errors) if errors.is_empty() => Ok(payload),
            (_, errors) => Err(errors),
        }
    }

    fn build(&self) -> (Value, FormErrors) {
        let mut errors = FormErrors::new();

        require(&mut errors, "name", &self.name);
        let latitude = optional_number(&mut errors, "latitude", &self.latitude);
        let longitude = optional_number(&mut errors, "longitude", &self.longitude);
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errors.insert("email", INVALID_EMAIL);
        }

        let address = self.address.trim();
        let payload = json!({
            "name": self.name.trim(),
            "description": self.description.trim(),
            "latitude": latitude.map_or(Value::Null, number_value),
            "longitude": longitude.map_or(Value::Null, number_value),
            "phone": self.phone.trim(),
            "email": email,
            "address": if address.is_empty() { Value::Null } else { Value::from(address) },
            "freeInstallation": self.free_installation,
            "noCommitment": self.no_commitment,
            "isActive": self.is_active,
        });

        (payload, errors)
    }
}

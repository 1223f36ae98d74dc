use serde_json::{json, Value};

use super::{
    flag_of, non_negative_number, number_value, require, text_of, FormErrors, BENEFITS_REQUIRED,
};

/// Icons offered by the benefit picker. The frontend icon set renders each.
pub const BENEFIT_ICONS: [&str; 12] = [
    "gift",
    "wifi",
    "zap",
    "shield",
    "tv",
    "headphones",
    "router",
    "clock",
    "star",
    "phone",
    "users",
    "settings",
];

const DEFAULT_BENEFIT_ICON: &str = "gift";

/// Picker search: case-insensitive substring match, catalog order kept.
pub fn filter_benefit_icons(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    BENEFIT_ICONS
        .into_iter()
        .filter(|name| name.contains(query.as_str()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpeedUnit {
    #[default]
    Mbps,
    Gbps,
}

impl SpeedUnit {
    pub fn code(&self) -> &'static str {
        match self {
            SpeedUnit::Mbps => "Mbps",
            SpeedUnit::Gbps => "Gbps",
        }
    }

    pub fn all() -> [SpeedUnit; 2] {
        [SpeedUnit::Mbps, SpeedUnit::Gbps]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|unit| unit.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenefitDraft {
    pub icon: String,
    pub description: String,
}

impl Default for BenefitDraft {
    fn default() -> Self {
        Self {
            icon: DEFAULT_BENEFIT_ICON.to_string(),
            description: String::new(),
        }
    }
}

/// Raw input of the plan dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    pub name: String,
    pub price: String,
    pub speed: String,
    pub speed_unit: SpeedUnit,
    pub benefits: Vec<BenefitDraft>,
    pub is_active: bool,
    pub is_recommended: bool,
    pub zone_id: String,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: "0".to_string(),
            speed: "0".to_string(),
            speed_unit: SpeedUnit::default(),
            benefits: vec![BenefitDraft::default()],
            is_active: true,
            is_recommended: false,
            zone_id: String::new(),
        }
    }
}

impl PlanDraft {
    /// Empty draft attached to `zone_id` (the first zone, when known).
    pub fn for_zone(zone_id: Option<String>) -> Self {
        Self {
            zone_id: zone_id.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn from_record(record: &Value) -> Self {
        let benefits: Vec<BenefitDraft> = record
            .get("benefits")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| BenefitDraft {
                        icon: text_of(item, "icon"),
                        description: text_of(item, "description"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: text_of(record, "name"),
            price: text_of(record, "price"),
            speed: text_of(record, "speed"),
            speed_unit: record
                .get("speedUnit")
                .and_then(Value::as_str)
                .and_then(SpeedUnit::from_code)
                .unwrap_or_default(),
            benefits: if benefits.is_empty() {
                vec![BenefitDraft::default()]
            } else {
                benefits
            },
            is_active: flag_of(record, "isActive", true),
            is_recommended: flag_of(record, "isRecommended", false),
            zone_id: text_of(record, "zoneId"),
        }
    }

    pub fn validate(&self) -> FormErrors {
        self.build().1
    }

    /// JSON body for `POST /plans`.
    pub fn to_payload(&self) -> Result<Value, FormErrors> {
        match self.build() {
            (payload, errors) if errors.is_empty() => Ok(payload),
            (_, errors) => Err(errors),
        }
    }

    fn build(&self) -> (Value, FormErrors) {
        let mut errors = FormErrors::new();

        require(&mut errors, "name", &self.name);
        let price = non_negative_number(&mut errors, "price", &self.price);
        let speed = non_negative_number(&mut errors, "speed", &self.speed);
        require(&mut errors, "zoneId", &self.zone_id);

        if self.benefits.is_empty() {
            errors.insert("benefits", BENEFITS_REQUIRED);
        }
        for (index, benefit) in self.benefits.iter().enumerate() {
            require(&mut errors, &format!("benefits.{index}.icon"), &benefit.icon);
            require(
                &mut errors,
                &format!("benefits.{index}.description"),
                &benefit.description,
            );
        }

        let benefits: Vec<Value> = self
            .benefits
            .iter()
            .map(|benefit| {
                json!({
                    "icon": benefit.icon.trim(),
                    "description": benefit.description.trim(),
                })
            })
            .collect();

        let payload = json!({
            "name": self.name.trim(),
            "price": number_value(price),
            "speed": number_value(speed),
            "speedUnit": self.speed_unit.code(),
            "benefits": benefits,
            "isActive": self.is_active,
            "isRecommended": self.is_recommended,
            "zoneId": self.zone_id.trim(),
        });

        (payload, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::{INVALID_NUMBER, NEGATIVE_NUMBER, REQUIRED};

    fn filled() -> PlanDraft {
        PlanDraft {
            name: "Hogar 200".into(),
            price: "59.9".into(),
            speed: "200".into(),
            benefits: vec![BenefitDraft {
                icon: "wifi".into(),
                description: "Router incluido".into(),
            }],
            zone_id: "z1".into(),
            ..PlanDraft::default()
        }
    }

    #[test]
    fn default_draft_is_blocked() {
        let errors = PlanDraft::default().validate();
        assert_eq!(errors.get("name"), Some(REQUIRED));
        assert_eq!(errors.get("zoneId"), Some(REQUIRED));
        assert_eq!(errors.get("benefits.0.description"), Some(REQUIRED));
        assert_eq!(errors.get("benefits.0.icon"), None);
        assert_eq!(errors.get("price"), None);
    }

    #[test]
    fn payload_of_a_valid_plan() {
        let payload = filled().to_payload().expect("valid draft");
        assert_eq!(payload["price"], 59.9);
        assert_eq!(payload["speedUnit"], "Mbps");
        assert_eq!(payload["benefits"][0]["icon"], "wifi");
        assert_eq!(payload["isRecommended"], false);
        assert_eq!(payload["zoneId"], "z1");
    }

    #[test]
    fn numbers_must_be_non_negative() {
        let draft = PlanDraft {
            price: "-5".into(),
            speed: "fast".into(),
            ..filled()
        };
        let errors = draft.validate();
        assert_eq!(errors.get("price"), Some(NEGATIVE_NUMBER));
        assert_eq!(errors.get("speed"), Some(INVALID_NUMBER));
    }

    #[test]
    fn at_least_one_benefit() {
        let mut draft = PlanDraft {
            benefits: Vec::new(),
            ..filled()
        };
        assert_eq!(draft.validate().get("benefits"), Some(BENEFITS_REQUIRED));
        assert!(draft.to_payload().is_err());

        draft.benefits.push(filled().benefits[0].clone());
        draft.benefits.push(BenefitDraft::default());
        let errors = draft.validate();
        assert_eq!(errors.get("benefits"), None);
        assert_eq!(errors.get("benefits.0.description"), None);
        assert_eq!(errors.get("benefits.1.description"), Some(REQUIRED));
    }

    #[test]
    fn prefills_from_a_record() {
        let record = json!({
            "id": "p1",
            "name": "Fibra",
            "price": 99,
            "speed": 1,
            "speedUnit": "Gbps",
            "benefits": [{ "icon": "tv", "description": "TV" }],
            "isRecommended": 1,
            "zoneId": "z2"
        });
        let draft = PlanDraft::from_record(&record);
        assert_eq!(draft.price, "99");
        assert_eq!(draft.speed_unit, SpeedUnit::Gbps);
        assert_eq!(draft.benefits[0].icon, "tv");
        assert!(draft.is_recommended);
        assert!(draft.validate().is_empty());

        let bare = PlanDraft::from_record(&json!({ "name": "X", "benefits": [] }));
        assert_eq!(bare.benefits, vec![BenefitDraft::default()]);
        assert_eq!(bare.speed_unit, SpeedUnit::Mbps);
    }

    #[test]
    fn icon_search() {
        assert_eq!(filter_benefit_icons("").len(), BENEFIT_ICONS.len());
        assert_eq!(filter_benefit_icons("  HEAD "), vec!["headphones"]);
        assert!(filter_benefit_icons("s").contains(&"shield"));
        assert!(filter_benefit_icons("nothing-like-this").is_empty());
    }

    #[test]
    fn new_drafts_follow_the_first_zone() {
        assert_eq!(PlanDraft::for_zone(Some("z9".into())).zone_id, "z9");
        assert_eq!(PlanDraft::for_zone(None).zone_id, "");
    }
}

//! Data field payloads.

use serde::Serialize;
use serde_json::Value;

use super::enums::FieldType;

/// Body of a create-data-field request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDataField {
    pub name: String,
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl NewDataField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            default_value: None,
            settings: None,
        }
    }
}

/// Body of an update-data-field request.
///
/// The field is addressed by `fieldid` or by `name`; at least one is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fieldid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_data_field_body() {
        let field = NewDataField {
            settings: Some(json!({ "options": ["a", "b"] })),
            ..NewDataField::new("Colour", FieldType::Dropdown)
        };

        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({
                "name": "Colour",
                "field_type": "dropdown",
                "settings": { "options": ["a", "b"] },
            })
        );
    }

    #[test]
    fn test_update_omits_absent_keys() {
        let update = DataFieldUpdate {
            fieldid: Some(12),
            default_value: Some("n/a".to_string()),
            ..DataFieldUpdate::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "fieldid": 12, "default_value": "n/a" })
        );
    }
}

//! List payloads.

use serde::Serialize;

/// Body of a create-list request.
///
/// `name` and `description` are required by the API; the sender and company
/// details are optional and left out of the body when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewList {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_domain: Option<String>,
}

impl NewList {
    /// Create a list body with only the required fields.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let list = NewList {
            sender_email: Some("news@example.test".to_string()),
            ..NewList::new("Newsletter", "Monthly news")
        };

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({
                "name": "Newsletter",
                "description": "Monthly news",
                "sender_email": "news@example.test",
            })
        );
    }
}

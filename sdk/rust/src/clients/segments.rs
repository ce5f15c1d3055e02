//! Segments resource client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::validate::{require_id, require_text};

/// Connector applied between segment rule groups when none is given.
pub const DEFAULT_CONNECTOR: &str = "and";

#[derive(Serialize)]
struct SegmentsQuery {
    segmentid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    listid: Option<u64>,
    limit: u32,
    offset: u64,
}

#[derive(Serialize)]
struct SegmentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    segmentid: Option<u64>,
    name: &'a str,
    rules: &'a Value,
    connector: &'a str,
}

#[derive(Serialize)]
struct SegmentIdQuery {
    segmentid: u64,
}

/// Client for segment operations.
pub struct SegmentsClient {
    transport: Arc<HttpTransport>,
}

impl SegmentsClient {
    /// Create a new segments client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get segments, optionally one segment or those of one list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(
        &self,
        segmentid: u64,
        listid: Option<u64>,
        limit: u32,
        offset: u64,
    ) -> Result<Value, Error> {
        self.transport
            .get(
                "/Segments",
                &SegmentsQuery { segmentid, listid, limit, offset },
            )
            .await
    }

    /// Create a segment.
    ///
    /// `rules` follows the documented structure, e.g.
    /// `{"Segments": [{"listids": [205], "rules": [{"ruleName": "emailaddress",
    /// "ruleOperator": "=", "ruleValues": ["john@ex.com"]}]}]}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `name` or `rules` is empty.
    pub async fn create(&self, name: &str, rules: &Value, connector: &str) -> Result<Value, Error> {
        require_text(name, "name")?;
        require_rules(rules)?;

        self.transport
            .post(
                "/Segments",
                &SegmentBody { segmentid: None, name, rules, connector },
            )
            .await
    }

    /// Replace a segment's name, rules and connector.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `segmentid` is 0 or `name` or `rules` is empty.
    pub async fn edit(
        &self,
        segmentid: u64,
        name: &str,
        rules: &Value,
        connector: &str,
    ) -> Result<Value, Error> {
        require_id(segmentid, "segmentid")?;
        require_text(name, "name")?;
        require_rules(rules)?;

        self.transport
            .put(
                "/Segments",
                &SegmentBody { segmentid: Some(segmentid), name, rules, connector },
            )
            .await
    }

    /// Delete a segment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `segmentid` is 0.
    pub async fn delete(&self, segmentid: u64) -> Result<Value, Error> {
        require_id(segmentid, "segmentid")?;

        self.transport
            .delete("/Segments", &SegmentIdQuery { segmentid })
            .await
    }
}

fn require_rules(rules: &Value) -> Result<(), Error> {
    let empty = match rules {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if empty {
        return Err(Error::Validation("rules are required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_rules() {
        assert!(require_rules(&json!({ "Segments": [] })).is_ok());
        assert!(require_rules(&json!({})).is_err());
        assert!(require_rules(&json!([])).is_err());
        assert!(require_rules(&Value::Null).is_err());
    }
}

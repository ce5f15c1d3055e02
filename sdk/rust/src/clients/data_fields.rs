//! Data fields resource client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{DataFieldUpdate, NewDataField};
use crate::validate::{require_id, require_text};

/// Default page size of the data field listing.
pub const DEFAULT_DATA_FIELDS_LIMIT: u32 = 10;

#[derive(Serialize)]
struct LoadQuery {
    /// Sent empty when absent, which the API reads as "all fields"
    fieldid: String,
    load_lists: bool,
    limit: u32,
    offset: u64,
}

#[derive(Serialize)]
struct FieldIdQuery {
    fieldid: u64,
}

/// Client for custom data field definitions.
pub struct DataFieldsClient {
    transport: Arc<HttpTransport>,
}

impl DataFieldsClient {
    /// Create a new data fields client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Load data fields, or a single one by id.
    ///
    /// # Arguments
    ///
    /// * `fieldid` - A single field to load
    /// * `load_lists` - Include the lists each field is linked to
    /// * `limit` - Page size
    /// * `offset` - Number of fields to skip
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn load(
        &self,
        fieldid: Option<u64>,
        load_lists: bool,
        limit: u32,
        offset: u64,
    ) -> Result<Value, Error> {
        let query = LoadQuery {
            fieldid: fieldid.map(|id| id.to_string()).unwrap_or_default(),
            load_lists,
            limit,
            offset,
        };
        self.transport.get("/DataFields", &query).await
    }

    /// Create a data field.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the name is empty.
    pub async fn create(&self, field: &NewDataField) -> Result<Value, Error> {
        require_text(&field.name, "name")?;

        self.transport.post("/DataFields", field).await
    }

    /// Update a data field addressed by id or name.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if neither `fieldid` nor `name` is set.
    pub async fn update(&self, update: &DataFieldUpdate) -> Result<Value, Error> {
        let has_name = update.name.as_deref().is_some_and(|n| !n.trim().is_empty());
        if update.fieldid.is_none() && !has_name {
            return Err(Error::Validation("Provide fieldid or name".to_string()));
        }

        self.transport.put("/DataFields", update).await
    }

    /// Delete a data field.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `fieldid` is 0.
    pub async fn delete(&self, fieldid: u64) -> Result<Value, Error> {
        require_id(fieldid, "fieldid")?;

        self.transport
            .delete("/DataFields", &FieldIdQuery { fieldid })
            .await
    }
}

//! Lists resource client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::pagination::{PageFuture, Paginator};
use crate::transport::HttpTransport;
use crate::types::{FieldType, NewList};
use crate::validate::{require_id, require_items, require_text};

#[derive(Serialize)]
struct ListsQuery {
    listid: u64,
    limit: u32,
    offset: u64,
}

#[derive(Serialize)]
struct ListFieldsBody<'a> {
    listid: u64,
    data_fields: &'a [u64],
}

#[derive(Serialize)]
struct ListDataFieldsQuery {
    listid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_type: Option<FieldType>,
    limit: u32,
    offset: u64,
}

/// Client for recipient list operations.
pub struct ListsClient {
    transport: Arc<HttpTransport>,
}

impl ListsClient {
    /// Create a new lists client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get one page of the lists you own or can access.
    ///
    /// # Arguments
    ///
    /// * `listid` - A single list to fetch, or 0 for all lists
    /// * `limit` - Page size
    /// * `offset` - Number of lists to skip
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, listid: u64, limit: u32, offset: u64) -> Result<Value, Error> {
        self.transport
            .get("/Lists", &ListsQuery { listid, limit, offset })
            .await
    }

    /// Walk every list, `page_size` lists per request.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `page_size` is zero.
    pub fn iter<'a>(&'a self, listid: u64, page_size: u32) -> Result<Paginator<'a>, Error> {
        Paginator::new(page_size, move |limit, offset| -> PageFuture<'a> {
            Box::pin(self.get(listid, limit, offset))
        })
    }

    /// Create a list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `name` or `description` is empty.
    pub async fn create(&self, list: &NewList) -> Result<Value, Error> {
        require_text(&list.name, "name")?;
        require_text(&list.description, "description")?;

        self.transport.post("/Lists", list).await
    }

    /// Link existing data fields to a list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `listid` is 0 or `field_ids` is empty.
    pub async fn add_data_fields(&self, listid: u64, field_ids: &[u64]) -> Result<Value, Error> {
        require_id(listid, "listid")?;
        require_items(field_ids, "field_ids")?;

        self.transport
            .post(
                "/Lists/AddDataFieldsToList",
                &ListFieldsBody { listid, data_fields: field_ids },
            )
            .await
    }

    /// Unlink data fields from a list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `listid` is 0 or `field_ids` is empty.
    pub async fn remove_data_fields(
        &self,
        listid: u64,
        field_ids: &[u64],
    ) -> Result<Value, Error> {
        require_id(listid, "listid")?;
        require_items(field_ids, "field_ids")?;

        self.transport
            .post(
                "/Lists/RemoveDataFieldsFromList",
                &ListFieldsBody { listid, data_fields: field_ids },
            )
            .await
    }

    /// Get the data fields linked to a list, optionally of one type.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `listid` is 0.
    pub async fn get_data_fields(
        &self,
        listid: u64,
        field_type: Option<FieldType>,
        limit: u32,
        offset: u64,
    ) -> Result<Value, Error> {
        require_id(listid, "listid")?;

        self.transport
            .get(
                "/Lists/GetDataFields",
                &ListDataFieldsQuery { listid, field_type, limit, offset },
            )
            .await
    }
}

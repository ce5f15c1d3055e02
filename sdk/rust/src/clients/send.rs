//! Campaign sending resource client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::validate::require_id;

#[derive(Serialize)]
struct SendBody {
    newsletterid: u64,
}

#[derive(Serialize)]
struct ScheduleBody {
    newsletterid: u64,
    listid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_time: Option<i64>,
}

/// Client for sending newsletters.
pub struct SendClient {
    transport: Arc<HttpTransport>,
}

impl SendClient {
    /// Create a new send client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Send a newsletter immediately.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `newsletterid` is 0.
    pub async fn send_newsletter(&self, newsletterid: u64) -> Result<Value, Error> {
        require_id(newsletterid, "newsletterid")?;

        self.transport
            .post("/Send/SendNewsletter", &SendBody { newsletterid })
            .await
    }

    /// Schedule a newsletter to a list.
    ///
    /// When `send_time` (a UNIX timestamp) is `None` the key is not sent and
    /// the platform decides when to send.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `newsletterid` or `listid` is 0.
    pub async fn schedule_to_list(
        &self,
        newsletterid: u64,
        listid: u64,
        send_time: Option<i64>,
    ) -> Result<Value, Error> {
        require_id(newsletterid, "newsletterid")?;
        require_id(listid, "listid")?;

        self.transport
            .post(
                "/Send/ScheduleSendNewsletterToList",
                &ScheduleBody { newsletterid, listid, send_time },
            )
            .await
    }
}

//! Campaign statistics resource client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{SearchType, UnsubscribeFilter};
use crate::validate::require_id;

#[derive(Serialize)]
struct StatQuery {
    statid: u64,
}

#[derive(Serialize)]
struct ClicksQuery {
    statid: u64,
    count_only: bool,
    unique_only: bool,
}

#[derive(Serialize)]
struct UnsubscribesByListQuery<'a> {
    listid: u64,
    #[serde(flatten)]
    filter: &'a UnsubscribeFilter,
}

/// Client for engagement statistics of sent campaigns.
pub struct StatsClient {
    transport: Arc<HttpTransport>,
}

impl StatsClient {
    /// Create a new stats client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get the contacts who opened an email campaign.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `statid` is 0.
    pub async fn get_opens(&self, statid: u64) -> Result<Value, Error> {
        require_id(statid, "statid")?;

        self.transport
            .get("/Stats/GetOpens", &StatQuery { statid })
            .await
    }

    /// Get the clicks for an email campaign.
    ///
    /// # Arguments
    ///
    /// * `statid` - Campaign stat id
    /// * `count_only` - Return only the number of clicks
    /// * `unique_only` - Count each contact once
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `statid` is 0.
    pub async fn get_clicks(
        &self,
        statid: u64,
        count_only: bool,
        unique_only: bool,
    ) -> Result<Value, Error> {
        require_id(statid, "statid")?;

        self.transport
            .get(
                "/Stats/GetClicks",
                &ClicksQuery { statid, count_only, unique_only },
            )
            .await
    }

    /// Get the profiles that unsubscribed from a list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `listid` is 0, or if a `between` search
    /// has no end date.
    pub async fn get_unsubscribes_by_list(
        &self,
        listid: u64,
        filter: &UnsubscribeFilter,
    ) -> Result<Value, Error> {
        require_id(listid, "listid")?;
        check_search_range(filter)?;

        self.transport
            .get(
                "/Stats/GetUnsubscribesByList",
                &UnsubscribesByListQuery { listid, filter },
            )
            .await
    }
}

/// A `between` search needs both ends of the range.
pub(crate) fn check_search_range(filter: &UnsubscribeFilter) -> Result<(), Error> {
    let missing = |date: &Option<String>| date.as_deref().map_or(true, |d| d.trim().is_empty());

    if filter.search_type == Some(SearchType::Between)
        && (missing(&filter.search_start_date) || missing(&filter.search_end_date))
    {
        return Err(Error::Validation(
            "search_start_date and search_end_date are required when search_type is between"
                .to_string(),
        ));
    }
    Ok(())
}

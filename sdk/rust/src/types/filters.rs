//! Filters shared by the unsubscribe reports.

use serde::Serialize;

use super::enums::SearchType;

/// Date and paging filter for unsubscribe reports.
///
/// Dates are passed through as given: a UNIX timestamp or a date string the
/// API accepts, such as `2020-01-10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsubscribeFilter {
    pub count_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_end_date: Option<String>,
    pub limit: u32,
    pub offset: u64,
}

impl Default for UnsubscribeFilter {
    fn default() -> Self {
        Self {
            count_only: false,
            search_type: None,
            search_start_date: None,
            search_end_date: None,
            limit: 100,
            offset: 0,
        }
    }
}

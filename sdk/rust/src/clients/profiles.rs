//! Profiles resource client.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::clients::stats::check_search_range;
use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Contact, DataFieldValue, NewProfile, ProfileLookup, SmsUnsubscribeType, UnsubscribeFilter};
use crate::validate::{clamp_page_size, require_id, require_items, require_text, MAX_SMS_PAGE_SIZE};

#[derive(Serialize)]
struct AddProfileBody<'a> {
    listid: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mobile_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mobile_prefix: Option<&'a str>,
    data_fields: &'a [DataFieldValue],
    confirmed: bool,
    mobile_confirmed: bool,
    add_to_autoresponders: bool,
}

#[derive(Serialize)]
struct UpdateProfileBody<'a> {
    profileid: u64,
    data_fields: &'a [DataFieldValue],
}

#[derive(Serialize)]
struct ByListQuery {
    listid: u64,
    limit: u32,
    offset: u64,
}

#[derive(Serialize)]
struct BySegmentQuery {
    segmentid: u64,
    limit: u32,
    offset: u64,
}

#[derive(Serialize)]
struct UnsubscribedQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    listid: Option<u64>,
    #[serde(flatten)]
    filter: &'a UnsubscribeFilter,
}

#[derive(Serialize)]
struct SmsUnsubscribedQuery<'a> {
    listid: u64,
    date: &'a str,
    #[serde(rename = "type")]
    kind: SmsUnsubscribeType,
    limit: u32,
    offset: u64,
}

/// Client for contact profile operations.
pub struct ProfilesClient {
    transport: Arc<HttpTransport>,
}

impl ProfilesClient {
    /// Create a new profiles client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Add a profile to a list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` before any request if `listid` is 0 or the
    /// profile has neither an email address nor a mobile number and prefix.
    pub async fn add_to_list(&self, profile: &NewProfile) -> Result<Value, Error> {
        require_id(profile.listid, "listid")?;
        let (email_address, mobile_number, mobile_prefix) = match profile.contact()? {
            Contact::Email(email) => (Some(email), None, None),
            Contact::Mobile { number, prefix } => (None, Some(number), Some(prefix)),
        };

        let body = AddProfileBody {
            listid: profile.listid,
            email_address,
            mobile_number,
            mobile_prefix,
            data_fields: &profile.data_fields,
            confirmed: profile.confirmed,
            mobile_confirmed: profile.mobile_confirmed,
            add_to_autoresponders: profile.add_to_autoresponders,
        };
        self.transport.post("/Profiles", &body).await
    }

    /// Update a profile's data fields.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `profileid` is 0 or `data_fields` is empty.
    pub async fn update(
        &self,
        profileid: u64,
        data_fields: &[DataFieldValue],
    ) -> Result<Value, Error> {
        require_id(profileid, "profileid")?;
        require_items(data_fields, "data_fields")?;

        self.transport
            .put(
                "/Profiles/UpdateProfile",
                &UpdateProfileBody { profileid, data_fields },
            )
            .await
    }

    /// Get one page of the profiles on a list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `listid` is 0.
    pub async fn get_by_list(&self, listid: u64, limit: u32, offset: u64) -> Result<Value, Error> {
        require_id(listid, "listid")?;

        self.transport
            .get(
                "/Profiles/GetProfilesByList",
                &ByListQuery { listid, limit, offset },
            )
            .await
    }

    /// Get one page of the profiles in a segment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `segmentid` is 0.
    pub async fn get_from_segment(
        &self,
        segmentid: u64,
        limit: u32,
        offset: u64,
    ) -> Result<Value, Error> {
        require_id(segmentid, "segmentid")?;

        self.transport
            .get(
                "/Profiles/GetProfilesFromSegment",
                &BySegmentQuery { segmentid, limit, offset },
            )
            .await
    }

    /// Load a profile's data field values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the lookup does not identify a profile.
    pub async fn load_data_fields(&self, lookup: &ProfileLookup) -> Result<Value, Error> {
        lookup.validate()?;

        self.transport
            .get("/Profiles/LoadProfileDataFields", lookup)
            .await
    }

    /// Get unsubscribed profiles, globally or for one list.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if a `between` search has no end date.
    pub async fn get_unsubscribed(
        &self,
        listid: Option<u64>,
        filter: &UnsubscribeFilter,
    ) -> Result<Value, Error> {
        check_search_range(filter)?;

        self.transport
            .get(
                "/Profiles/GetUnsubscribedProfiles",
                &UnsubscribedQuery { listid, filter },
            )
            .await
    }

    /// Get the profiles on a list that unsubscribed from SMS relative to `date`.
    ///
    /// # Arguments
    ///
    /// * `listid` - List to report on
    /// * `date` - UNIX timestamp or date string, e.g. `2024-06-01`
    /// * `kind` - Whether to match unsubscribes on, before or after `date`
    /// * `limit` - Page size, capped at 1000
    /// * `offset` - Number of profiles to skip
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `listid` is 0, `date` is empty or
    /// `limit` is 0.
    pub async fn get_sms_unsubscribed(
        &self,
        listid: u64,
        date: &str,
        kind: SmsUnsubscribeType,
        limit: u32,
        offset: u64,
    ) -> Result<Value, Error> {
        require_id(listid, "listid")?;
        require_text(date, "date")?;
        let limit = clamp_page_size(limit, MAX_SMS_PAGE_SIZE)?;

        self.transport
            .get(
                "/Profiles/GetProfilesSMSUnsubscribed",
                &SmsUnsubscribedQuery { listid, date, kind, limit, offset },
            )
            .await
    }
}

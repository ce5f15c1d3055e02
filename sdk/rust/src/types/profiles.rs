//! Profile payloads.

use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// A value for one custom data field on a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFieldValue {
    pub fieldid: String,
    pub field_value: String,
}

impl DataFieldValue {
    pub fn new(fieldid: impl Into<String>, field_value: impl Into<String>) -> Self {
        Self {
            fieldid: fieldid.into(),
            field_value: field_value.into(),
        }
    }
}

/// Parses `FIELDID=VALUE`, splitting on the first `=`.
impl FromStr for DataFieldValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (fieldid, value) = s
            .split_once('=')
            .ok_or_else(|| Error::Validation(format!("Invalid --field '{s}'. Use FIELDID=VALUE")))?;
        let fieldid = fieldid.trim();
        if fieldid.is_empty() {
            return Err(Error::Validation(format!(
                "Invalid --field '{s}'. FIELDID cannot be empty"
            )));
        }
        Ok(Self::new(fieldid, value))
    }
}

/// How a new profile can be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact<'a> {
    Email(&'a str),
    Mobile { number: &'a str, prefix: &'a str },
}

/// Arguments for adding a profile to a list.
///
/// Either `email_address`, or both `mobile_number` and `mobile_prefix`, must
/// be set. When an email address is given the mobile details are not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub listid: u64,
    pub email_address: Option<String>,
    pub mobile_number: Option<String>,
    /// Country dialing code, e.g. `45`
    pub mobile_prefix: Option<String>,
    pub data_fields: Vec<DataFieldValue>,
    /// `false` creates the profile unconfirmed and triggers a confirmation email
    pub confirmed: bool,
    pub mobile_confirmed: bool,
    pub add_to_autoresponders: bool,
}

impl NewProfile {
    /// Profile reachable by email.
    pub fn with_email(listid: u64, email_address: impl Into<String>) -> Self {
        Self {
            email_address: Some(email_address.into()),
            ..Self::empty(listid)
        }
    }

    /// Profile reachable by SMS.
    pub fn with_mobile(
        listid: u64,
        mobile_number: impl Into<String>,
        mobile_prefix: impl Into<String>,
    ) -> Self {
        Self {
            mobile_number: Some(mobile_number.into()),
            mobile_prefix: Some(mobile_prefix.into()),
            ..Self::empty(listid)
        }
    }

    /// Profile with no contact details set yet.
    pub fn empty(listid: u64) -> Self {
        Self {
            listid,
            email_address: None,
            mobile_number: None,
            mobile_prefix: None,
            data_fields: Vec::new(),
            confirmed: true,
            mobile_confirmed: true,
            add_to_autoresponders: false,
        }
    }

    /// Resolve the contact channel, preferring email.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` when neither an email address nor a full
    /// mobile number and prefix are present.
    pub fn contact(&self) -> Result<Contact<'_>, Error> {
        if let Some(email) = non_empty(self.email_address.as_deref()) {
            return Ok(Contact::Email(email));
        }
        match (
            non_empty(self.mobile_number.as_deref()),
            non_empty(self.mobile_prefix.as_deref()),
        ) {
            (Some(number), Some(prefix)) => Ok(Contact::Mobile { number, prefix }),
            _ => Err(Error::Validation(
                "Provide email_address OR mobile_number+mobile_prefix".to_string(),
            )),
        }
    }
}

/// Selects the profile whose data fields are loaded.
///
/// Accepted combinations: `profileid`; `listid` with `email_address`; or
/// `listid` with `mobile_number` and `mobile_prefix`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileLookup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profileid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listid: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_prefix: Option<String>,
}

impl ProfileLookup {
    /// Check that the lookup names exactly one profile.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for any other combination.
    pub fn validate(&self) -> Result<(), Error> {
        if self.profileid.is_some_and(|id| id != 0) {
            return Ok(());
        }
        let by_list = self.listid.is_some_and(|id| id != 0);
        let by_email = non_empty(self.email_address.as_deref()).is_some();
        let by_mobile = non_empty(self.mobile_number.as_deref()).is_some()
            && non_empty(self.mobile_prefix.as_deref()).is_some();

        if by_list && (by_email || by_mobile) {
            Ok(())
        } else {
            Err(Error::Validation(
                "Provide profileid OR listid+email OR listid+mobile+prefix".to_string(),
            ))
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

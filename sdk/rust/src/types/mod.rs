//! Typed arguments for the resource operations.
//!
//! Optional fields serialize only when present, so a request carries exactly
//! the keys the caller supplied.

pub mod data_fields;
pub mod enums;
pub mod filters;
pub mod lists;
pub mod profiles;

// Re-exports
pub use data_fields::{DataFieldUpdate, NewDataField};
pub use enums::{FieldType, SearchType, SmsUnsubscribeType};
pub use filters::UnsubscribeFilter;
pub use lists::NewList;
pub use profiles::{Contact, DataFieldValue, NewProfile, ProfileLookup};

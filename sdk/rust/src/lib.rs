//! Mail platform SDK for Rust
//!
//! Async client for the mail/SMS marketing platform REST API v2.0: lists,
//! segments, profiles, data fields, campaign sending and unsubscribe
//! reporting.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mailplatform::{ClientOptions, Credentials, MailPlatformClient};
//!
//! # async fn run() -> Result<(), mailplatform::Error> {
//! let credentials = Credentials::new("api-user", "api-token")?;
//! let client = MailPlatformClient::new(&credentials, ClientOptions::default())?;
//!
//! let opens = client.stats().get_opens(42).await?;
//! println!("{opens}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod clients;
pub mod credentials;
pub mod error;
pub mod pagination;
pub mod testing;
pub mod transport;
pub mod types;
pub mod validate;

// Re-exports
pub use client::{ClientOptions, MailPlatformClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use clients::{
    DataFieldsClient, ListsClient, ProfilesClient, SegmentsClient, SendClient, StatsClient,
};
pub use credentials::Credentials;
pub use error::{ApiError, ApiErrorKind, Error};
pub use pagination::{PageFuture, Paginator, DEFAULT_ITEMS_FIELD};
pub use transport::{Backoff, HttpTransport, RetryConfig, Sleeper, StatusClass, TokioSleeper};
pub use types::{
    Contact, DataFieldUpdate, DataFieldValue, FieldType, NewDataField, NewList, NewProfile,
    ProfileLookup, SearchType, SmsUnsubscribeType, UnsubscribeFilter,
};

//! Resource clients for the mail platform SDK.

pub mod data_fields;
pub mod lists;
pub mod profiles;
pub mod segments;
pub mod send;
pub mod stats;

// Re-exports
pub use data_fields::DataFieldsClient;
pub use lists::ListsClient;
pub use profiles::ProfilesClient;
pub use segments::SegmentsClient;
pub use send::SendClient;
pub use stats::StatsClient;

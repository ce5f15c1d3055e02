//! Testing utilities for the mail platform SDK.
//!
//! Provides a sleeper that records retry delays instead of waiting, for
//! tests of code built on the SDK.

mod sleeper;

pub use sleeper::RecordingSleeper;

//! Mail platform SDK main client.
//!
//! Provides the primary interface for interacting with the platform API.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::{
    DataFieldsClient, ListsClient, ProfilesClient, SegmentsClient, SendClient, StatsClient,
};
use crate::credentials::Credentials;
use crate::error::Error;
use crate::transport::{HttpTransport, RetryConfig, Sleeper};

/// Default base URL for the platform API.
pub const DEFAULT_BASE_URL: &str = "https://api.mailmailmail.net/v2.0";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Construction options for [`MailPlatformClient`].
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Base URL (default: <https://api.mailmailmail.net/v2.0>)
    pub base_url: Option<String>,
    /// Per-attempt request timeout (default: 30 seconds)
    pub timeout: Option<Duration>,
    /// Retry behavior (default: [`RetryConfig::default`])
    pub retry_config: Option<RetryConfig>,
    /// Print every request attempt to stdout
    pub trace_requests: bool,
    /// Replacement for the tokio sleeper used between attempts
    pub sleeper: Option<Arc<dyn Sleeper>>,
}

/// Main client for interacting with the platform API.
///
/// Aggregates all resource clients over a single authenticated transport.
///
/// # Example
///
/// ```rust,ignore
/// use mailplatform::{ClientOptions, Credentials, MailPlatformClient};
///
/// let credentials = Credentials::new("api-user", "api-token")?;
/// let client = MailPlatformClient::new(&credentials, ClientOptions::default())?;
///
/// let lists = client.lists().iter(0, 100)?.collect_all().await?;
/// ```
pub struct MailPlatformClient {
    transport: Arc<HttpTransport>,
    lists: ListsClient,
    stats: StatsClient,
    send: SendClient,
    profiles: ProfilesClient,
    segments: SegmentsClient,
    data_fields: DataFieldsClient,
}

impl MailPlatformClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(credentials: &Credentials, options: ClientOptions) -> Result<Self, Error> {
        let base_url = options.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let timeout = options
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let mut transport = HttpTransport::new(
            base_url,
            credentials,
            timeout,
            options.retry_config,
            options.trace_requests,
        )?;
        if let Some(sleeper) = options.sleeper {
            transport = transport.with_sleeper(sleeper);
        }

        Ok(Self::from_transport(Arc::new(transport)))
    }

    /// Build the resource clients over an existing transport.
    #[must_use]
    pub fn from_transport(transport: Arc<HttpTransport>) -> Self {
        Self {
            lists: ListsClient::new(Arc::clone(&transport)),
            stats: StatsClient::new(Arc::clone(&transport)),
            send: SendClient::new(Arc::clone(&transport)),
            profiles: ProfilesClient::new(Arc::clone(&transport)),
            segments: SegmentsClient::new(Arc::clone(&transport)),
            data_fields: DataFieldsClient::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Get the underlying HTTP transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the lists client.
    #[must_use]
    pub fn lists(&self) -> &ListsClient {
        &self.lists
    }

    /// Get the stats client.
    #[must_use]
    pub fn stats(&self) -> &StatsClient {
        &self.stats
    }

    /// Get the send client.
    #[must_use]
    pub fn send(&self) -> &SendClient {
        &self.send
    }

    /// Get the profiles client.
    #[must_use]
    pub fn profiles(&self) -> &ProfilesClient {
        &self.profiles
    }

    /// Get the segments client.
    #[must_use]
    pub fn segments(&self) -> &SegmentsClient {
        &self.segments
    }

    /// Get the data fields client.
    #[must_use]
    pub fn data_fields(&self) -> &DataFieldsClient {
        &self.data_fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test-user", "test-token").expect("valid credentials")
    }

    #[test]
    fn test_client_creation() {
        let client = MailPlatformClient::new(&credentials(), ClientOptions::default())
            .expect("Client creation should succeed");

        assert_eq!(client.transport().base_url(), DEFAULT_BASE_URL);
        assert!(!client.transport().trace_requests());
    }

    #[test]
    fn test_client_with_custom_options() {
        let options = ClientOptions {
            base_url: Some("https://staging.example.test/v2.0/".to_string()),
            timeout: Some(Duration::from_secs(60)),
            retry_config: Some(RetryConfig {
                max_attempts: 2,
                ..RetryConfig::default()
            }),
            trace_requests: true,
            sleeper: None,
        };
        let client =
            MailPlatformClient::new(&credentials(), options).expect("Client creation should succeed");

        assert_eq!(client.transport().base_url(), "https://staging.example.test/v2.0");
        assert_eq!(client.transport().retry_config().max_attempts, 2);
        assert!(client.transport().trace_requests());
    }
}

//! Shared helpers for the SDK integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use mailplatform::testing::RecordingSleeper;
use mailplatform::{ClientOptions, Credentials, MailPlatformClient, RetryConfig};
use wiremock::MockServer;

pub const USERNAME: &str = "test-user";
pub const TOKEN: &str = "test-token";

/// Client pointed at `server` that records retry delays instead of sleeping.
pub fn client_for(server: &MockServer, sleeper: &RecordingSleeper) -> MailPlatformClient {
    client_with_retry(server, sleeper, RetryConfig::default())
}

pub fn client_with_retry(
    server: &MockServer,
    sleeper: &RecordingSleeper,
    retry_config: RetryConfig,
) -> MailPlatformClient {
    client_at(&server.uri(), sleeper, retry_config)
}

pub fn client_at(
    base_url: &str,
    sleeper: &RecordingSleeper,
    retry_config: RetryConfig,
) -> MailPlatformClient {
    let credentials = Credentials::new(USERNAME, TOKEN).expect("valid credentials");
    MailPlatformClient::new(
        &credentials,
        ClientOptions {
            base_url: Some(base_url.to_string()),
            retry_config: Some(retry_config),
            sleeper: Some(Arc::new(sleeper.clone())),
            ..ClientOptions::default()
        },
    )
    .expect("Client creation should succeed")
}

/// Number of requests the mock server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .len()
}

use std::env;
use std::time::Duration;

use mailplatform::{
    ClientOptions, Credentials, MailPlatformClient, RetryConfig, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};

use crate::error::CliError;

pub const USERNAME_VAR: &str = "MP_API_USERNAME";
pub const TOKEN_VAR: &str = "MP_API_TOKEN";
pub const BASE_URL_VAR: &str = "MP_API_BASE";
pub const TIMEOUT_VAR: &str = "MP_API_TIMEOUT_SECS";
pub const MAX_ATTEMPTS_VAR: &str = "MP_API_MAX_ATTEMPTS";

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// API username sent in the `Apiusername` header
    pub username: String,
    /// API token sent in the `Apitoken` header
    pub token: String,
    /// API base URL (default: https://api.mailmailmail.net/v2.0)
    pub base_url: String,
    /// Per-attempt request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Attempts per request, including the first (default: 5)
    pub max_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, treating blank values as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (Some(username), Some(token)) = (var(USERNAME_VAR), var(TOKEN_VAR)) else {
            return Err(ConfigError::MissingCredentials);
        };

        let base_url = var(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = var(TIMEOUT_VAR)
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(TIMEOUT_VAR))?;

        let max_attempts: u32 = var(MAX_ATTEMPTS_VAR)
            .unwrap_or_else(|| RetryConfig::default().max_attempts.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(MAX_ATTEMPTS_VAR))?;
        if max_attempts == 0 {
            return Err(ConfigError::InvalidValue(MAX_ATTEMPTS_VAR));
        }

        Ok(Self {
            username,
            token,
            base_url,
            timeout_secs,
            max_attempts,
        })
    }

    /// Build the API client, optionally printing every request attempt
    pub fn client(&self, trace_requests: bool) -> Result<MailPlatformClient, CliError> {
        let credentials = Credentials::new(&self.username, &self.token)?;
        let options = ClientOptions {
            base_url: Some(self.base_url.clone()),
            timeout: Some(Duration::from_secs(self.timeout_secs)),
            retry_config: Some(RetryConfig {
                max_attempts: self.max_attempts,
                ..RetryConfig::default()
            }),
            trace_requests,
            sleeper: None,
        };
        Ok(MailPlatformClient::new(&credentials, options)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API username/token missing. Set MP_API_USERNAME and MP_API_TOKEN.")]
    MissingCredentials,
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

//! HTTP transport for the mail platform SDK.
//!
//! Issues authenticated requests with exponential backoff on rate limiting
//! and transient failures, and classifies terminal status codes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::credentials::Credentials;
use crate::error::{ApiError, Error};

const USERNAME_HEADER: &str = "apiusername";
const TOKEN_HEADER: &str = "apitoken";

/// Configuration for automatic retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Upper bound for the doubled delay
    pub max_backoff: Duration,
    /// Status codes that fail immediately without retry
    pub terminal_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(30),
            terminal_statuses: vec![400, 401, 403, 404, 409, 500],
        }
    }
}

/// How a response status is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx, decode the body
    Success,
    /// 429, back off and retry
    RateLimited,
    /// Fail immediately with the body
    Terminal,
    /// Anything else, back off and retry
    Transient,
}

impl RetryConfig {
    /// Classify a response status.
    #[must_use]
    pub fn classify(&self, status: u16) -> StatusClass {
        if status == 429 {
            StatusClass::RateLimited
        } else if (200..300).contains(&status) {
            StatusClass::Success
        } else if self.terminal_statuses.contains(&status) {
            StatusClass::Terminal
        } else {
            StatusClass::Transient
        }
    }
}

/// Doubling delay capped at a maximum.
#[derive(Debug, Clone)]
pub struct Backoff {
    current: Duration,
    max: Duration,
}

impl Backoff {
    /// Start a schedule at `initial`, never exceeding `max`.
    #[must_use]
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self {
            current: initial.min(max),
            max,
        }
    }

    /// Return the current delay and advance the schedule.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = self
            .current
            .checked_mul(2)
            .map_or(self.max, |doubled| doubled.min(self.max));
        delay
    }
}

/// Suspends the caller between attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Sleep for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// HTTP transport layer with authentication headers and retry logic.
///
/// One `reqwest::Client` is built with the credential headers as defaults
/// and reused for the lifetime of the transport.
pub struct HttpTransport {
    base_url: String,
    client: Client,
    retry_config: RetryConfig,
    trace_requests: bool,
    sleeper: Arc<dyn Sleeper>,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests, a trailing `/` is dropped
    /// * `credentials` - Username and token sent as headers
    /// * `timeout` - Per-attempt request timeout
    /// * `retry_config` - Configuration for retry behavior
    /// * `trace_requests` - Print each attempt's method, URL, params and body to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are not valid header values or the
    /// HTTP client cannot be created.
    pub fn new(
        base_url: &str,
        credentials: &Credentials,
        timeout: Duration,
        retry_config: Option<RetryConfig>,
        trace_requests: bool,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(USERNAME_HEADER),
            header_value(credentials.username())?,
        );
        let mut token = header_value(credentials.token())?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(TOKEN_HEADER), token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry_config: retry_config.unwrap_or_default(),
            trace_requests,
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replace the sleeper used between attempts.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// GET `path` with query parameters.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn get<P>(&self, path: &str, params: &P) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, path, Some(params), None::<&()>)
            .await
    }

    /// POST `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, None::<&()>, Some(body))
            .await
    }

    /// PUT `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, None::<&()>, Some(body))
            .await
    }

    /// DELETE `path` with query parameters.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::request`].
    pub async fn delete<P>(&self, path: &str, params: &P) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::DELETE, path, Some(params), None::<&()>)
            .await
    }

    /// Make a request with automatic retry.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method
    /// * `path` - API path (e.g., "/Lists")
    /// * `params` - Query parameters, a flat record of scalars
    /// * `body` - JSON request body
    ///
    /// # Returns
    ///
    /// The decoded JSON response body
    ///
    /// # Errors
    ///
    /// * `Error::Api` for a terminal status code, after a single attempt
    /// * `Error::NonJson` when a success response cannot be decoded
    /// * `Error::RetriesExhausted` when every attempt was rate limited or transient
    pub async fn request<P, B>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
        body: Option<&B>,
    ) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let query = match params {
            Some(p) => query_pairs(serde_json::to_value(p)?)?,
            None => Vec::new(),
        };
        let body = body.map(serde_json::to_value).transpose()?;

        let max_attempts = self.retry_config.max_attempts.max(1);
        let mut backoff = Backoff::new(
            self.retry_config.initial_backoff,
            self.retry_config.max_backoff,
        );
        let mut last = String::new();

        for attempt in 1..=max_attempts {
            if self.trace_requests {
                trace_request(&method, &url, &query, body.as_ref());
            }
            debug!(%method, %url, attempt, "sending request");

            let mut request = self.client.request(method.clone(), &url);
            if !query.is_empty() {
                request = request.query(&query);
            }
            if let Some(b) = &body {
                request = request.json(b);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    match self.retry_config.classify(status) {
                        StatusClass::Success => {
                            let bytes = response.bytes().await.map_err(|e| {
                                Error::Http(format!("failed to read response from {url}: {e}"))
                            })?;
                            return serde_json::from_slice(&bytes)
                                .map_err(|source| Error::NonJson { url, source });
                        }
                        StatusClass::Terminal => {
                            let text = response.text().await.unwrap_or_default();
                            return Err(ApiError::new(status, url, text).into());
                        }
                        StatusClass::RateLimited => {
                            last = format!("rate limited (HTTP 429) by {url}");
                        }
                        StatusClass::Transient => {
                            last = format!("unexpected HTTP {status} from {url}");
                        }
                    }
                }
                Err(e) => {
                    last = format!("request to {url} failed: {e}");
                }
            }

            if attempt < max_attempts {
                let delay = backoff.next_delay();
                warn!(attempt, ?delay, reason = %last, "retrying request");
                self.sleeper.sleep(delay).await;
            }
        }

        Err(Error::RetriesExhausted {
            attempts: max_attempts,
            url,
            last,
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the retry configuration.
    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry_config
    }

    /// Whether requests are traced to stdout.
    #[must_use]
    pub fn trace_requests(&self) -> bool {
        self.trace_requests
    }
}

fn header_value(value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::Configuration("credentials contain invalid header characters".to_string()))
}

/// Flatten a serialized parameter record into query pairs.
///
/// Null values are skipped. Strings are sent unquoted and booleans as
/// `true`/`false`.
fn query_pairs(params: Value) -> Result<Vec<(String, String)>, Error> {
    let map = match params {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::Validation(format!(
                "query parameters must be a record, got {other}"
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            nested => {
                return Err(Error::Validation(format!(
                    "query parameter '{key}' must be a scalar, got {nested}"
                )))
            }
        };
        pairs.push((key, rendered));
    }
    Ok(pairs)
}

fn trace_request(method: &Method, url: &str, query: &[(String, String)], body: Option<&Value>) {
    println!("Request: {method} {url}");
    if !query.is_empty() {
        let rendered: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("Params: {}", rendered.join("&"));
    }
    if let Some(b) = body {
        let pretty = serde_json::to_string_pretty(b).unwrap_or_else(|_| b.to_string());
        println!("Body: {pretty}");
    }
}

//! Error types for the mail platform SDK.

use thiserror::Error;

/// Main error type for the mail platform SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// Arguments rejected locally, before any request was sent
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading a successful response failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// Documented terminal API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success status whose body is not JSON
    #[error("Non-JSON response from {url}: {source}")]
    NonJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Every attempt hit rate limiting or a transient failure
    #[error("Failed after {attempts} attempts: {url} ({last})")]
    RetriesExhausted {
        attempts: u32,
        url: String,
        last: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was raised before any request went out.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Configuration(_) | Self::Serialization(_)
        )
    }
}

/// Category of a terminal API status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 5xx
    Server,
    /// Any other status configured as terminal
    Other,
}

impl ApiErrorKind {
    /// Classify a status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// A terminal API error carrying the status code and raw response body.
#[derive(Error, Debug, Clone)]
#[error("{status} error from {url}: {body}")]
pub struct ApiError {
    status: u16,
    kind: ApiErrorKind,
    url: String,
    body: String,
}

impl ApiError {
    /// Create an API error for the given status.
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            kind: ApiErrorKind::from_status(status),
            url: url.into(),
            body: body.into(),
        }
    }

    /// Get the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the error category.
    #[must_use]
    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Get the request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_kind_from_status() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::BadRequest);
        assert_eq!(ApiErrorKind::from_status(401), ApiErrorKind::Unauthorized);
        assert_eq!(ApiErrorKind::from_status(403), ApiErrorKind::Forbidden);
        assert_eq!(ApiErrorKind::from_status(404), ApiErrorKind::NotFound);
        assert_eq!(ApiErrorKind::from_status(409), ApiErrorKind::Conflict);
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(418), ApiErrorKind::Other);
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(404, "https://api.example.test/Lists", r#"{"error":"nope"}"#);

        assert_eq!(error.status(), 404);
        assert_eq!(error.kind(), ApiErrorKind::NotFound);
        assert_eq!(
            error.to_string(),
            r#"404 error from https://api.example.test/Lists: {"error":"nope"}"#
        );
    }

    #[test]
    fn test_validation_error_is_local() {
        let error = Error::Validation("listid is required".to_string());

        assert!(error.is_local());
        assert_eq!(error.to_string(), "listid is required");
    }

    #[test]
    fn test_retries_exhausted_is_not_local() {
        let error = Error::RetriesExhausted {
            attempts: 5,
            url: "https://api.example.test/Lists".to_string(),
            last: "HTTP 429".to_string(),
        };

        assert!(!error.is_local());
        assert!(error.to_string().starts_with("Failed after 5 attempts"));
    }
}

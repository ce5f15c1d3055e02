//! API credentials.

use std::fmt;

use crate::error::Error;

/// Username and token pair sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    /// Create credentials, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if either value is empty.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Result<Self, Error> {
        let username = username.into();
        let token = token.into();

        if username.trim().is_empty() || token.trim().is_empty() {
            return Err(Error::Configuration(
                "API username/token missing. Set MP_API_USERNAME and MP_API_TOKEN.".to_string(),
            ));
        }

        Ok(Self { username, token })
    }

    /// Get the API username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the API token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_values() {
        assert!(matches!(
            Credentials::new("", "token"),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            Credentials::new("user", "  "),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials = Credentials::new("user", "s3cret").expect("valid credentials");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("user"));
        assert!(!debug.contains("s3cret"));
    }
}

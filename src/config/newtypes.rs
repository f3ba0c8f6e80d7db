//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated server URL.
///
/// Only the origin (scheme, host and optional port) is used to address
/// requests; object paths are absolute and are resolved against the origin.
///
/// # Example
///
/// ```rust
/// use kube_rest::HostUrl;
///
/// let url = HostUrl::new("https://localhost:8443/ignored").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("localhost"));
/// assert_eq!(url.origin(), "https://localhost:8443");
///
/// let url = HostUrl::new("http://[::1]:8080").unwrap();
/// assert_eq!(url.origin(), "http://[::1]:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    raw: String,
    parsed: reqwest::Url,
    origin: String,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// The URL must use the `http` or `https` scheme and name a host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: raw.clone() };

        // The URL parser silently drops tabs and newlines
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let parsed = reqwest::Url::parse(&raw).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().map_or(true, str::is_empty)
        {
            return Err(invalid());
        }

        let origin = parsed.origin().ascii_serialization();
        Ok(Self {
            raw,
            parsed,
            origin,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Returns the host name portion of the URL. IPv6 hosts keep their brackets.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    /// Returns the explicit port, if one other than the scheme default was given.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.parsed.port()
    }

    /// Returns `scheme://host[:port]` without any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// A non-empty credential (bearer token or password).
///
/// The `Debug` implementation masks the value so credentials never end up
/// in logs.
///
/// ```rust
/// use kube_rest::SecretToken;
///
/// let token = SecretToken::new("abc").unwrap();
/// assert_eq!(format!("{:?}", token), "SecretToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(String);

impl SecretToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for SecretToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretToken(*****)")
    }
}

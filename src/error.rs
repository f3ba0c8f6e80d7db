//! Configuration error types for the kube-rest client.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so that
//! an invalid transport setup fails fast, before any request is issued.
//! Configuration errors are never retried.
//!
//! # Example
//!
//! ```rust
//! use kube_rest::{ConfigError, HostUrl};
//!
//! let result = HostUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration or
/// constructing a transport from it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://localhost:8443').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A credential token was empty.
    #[error("Credential token cannot be empty.")]
    EmptyToken,

    /// The QPS/burst pair cannot drive a token bucket.
    #[error("Invalid rate limit: {reason}")]
    InvalidRateLimit {
        /// Why the rate limit was rejected.
        reason: String,
    },

    /// A header value could not be encoded.
    #[error("Invalid value for header '{name}'.")]
    InvalidHeaderValue {
        /// The header whose value was rejected.
        name: &'static str,
    },

    /// The root CA certificate could not be parsed.
    #[error("Invalid root certificate: {reason}")]
    InvalidCertificate {
        /// The underlying parse failure.
        reason: String,
    },

    /// The underlying HTTP transport could not be constructed.
    #[error("Failed to build HTTP transport: {reason}")]
    TransportBuild {
        /// The underlying builder failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "host" };
        let message = error.to_string();
        assert!(message.contains("host"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_host_url_error_message() {
        let error = ConfigError::InvalidHostUrl {
            url: "bad host".to_string(),
        };
        assert!(error.to_string().contains("bad host"));
    }

    #[test]
    fn test_invalid_header_value_names_header() {
        let error = ConfigError::InvalidHeaderValue {
            name: "User-Agent",
        };
        assert_eq!(error.to_string(), "Invalid value for header 'User-Agent'.");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyToken;
        let _: &dyn std::error::Error = &error;
    }
}

//! Transport configuration for the kube-rest client.
//!
//! The main types in this module are:
//!
//! - [`RestConfig`]: everything the HTTP transport needs (server, content
//!   negotiation, credentials, TLS roots, rate limits)
//! - [`RestConfigBuilder`]: a builder for constructing [`RestConfig`] instances
//! - [`HostUrl`]: a validated server URL
//! - [`SecretToken`]: a credential with masked debug output
//! - [`Credentials`]: how requests authenticate
//!
//! # Example
//!
//! ```rust
//! use kube_rest::{HostUrl, RestConfig, SecretToken, Credentials};
//!
//! let config = RestConfig::builder()
//!     .host(HostUrl::new("https://localhost:8443").unwrap())
//!     .credentials(Credentials::Bearer(SecretToken::new("token").unwrap()))
//!     .qps(50.0)
//!     .burst(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.burst(), 100);
//! ```

mod newtypes;

pub use newtypes::{HostUrl, SecretToken};

use std::time::Duration;

use crate::error::ConfigError;

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("kube-rest/", env!("CARGO_PKG_VERSION"));

/// Default `Content-Type` for request bodies.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Default sustained request rate.
pub const DEFAULT_QPS: f32 = 20.0;

/// Default token bucket capacity.
pub const DEFAULT_BURST: u32 = 30;

/// How requests authenticate against the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`.
    Bearer(SecretToken),
    /// HTTP basic authentication.
    Basic {
        /// The user name.
        username: String,
        /// The password.
        password: SecretToken,
    },
}

/// Configuration for the HTTP transport.
///
/// `RestConfig` is `Clone`, `Send`, and `Sync`; one configuration can back
/// any number of clients.
#[derive(Clone, Debug)]
pub struct RestConfig {
    host: HostUrl,
    user_agent: String,
    accept_content_type: Option<String>,
    content_type: String,
    credentials: Option<Credentials>,
    root_ca_pem: Option<Vec<u8>>,
    insecure_skip_tls_verify: bool,
    timeout: Option<Duration>,
    qps: f32,
    burst: u32,
}

impl RestConfig {
    /// Creates a new builder for constructing a `RestConfig`.
    #[must_use]
    pub fn builder() -> RestConfigBuilder {
        RestConfigBuilder::new()
    }

    /// Returns the default configuration for `server`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if `server` cannot be parsed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kube_rest::RestConfig;
    ///
    /// let config = RestConfig::for_server("http://127.0.0.1:8080").unwrap();
    /// assert_eq!(config.content_type(), "application/json");
    /// assert!(RestConfig::for_server("127.0.0.1").is_err());
    /// ```
    pub fn for_server(server: &str) -> Result<Self, ConfigError> {
        Self::builder().host(HostUrl::new(server)?).build()
    }

    /// Returns the server URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the `Accept` header value, if configured.
    #[must_use]
    pub fn accept_content_type(&self) -> Option<&str> {
        self.accept_content_type.as_deref()
    }

    /// Returns the `Content-Type` used for request bodies.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Returns the request credentials, if configured.
    #[must_use]
    pub const fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the PEM encoded root certificate, if configured.
    #[must_use]
    pub fn root_ca_pem(&self) -> Option<&[u8]> {
        self.root_ca_pem.as_deref()
    }

    /// Returns whether server certificates are accepted without verification.
    #[must_use]
    pub const fn insecure_skip_tls_verify(&self) -> bool {
        self.insecure_skip_tls_verify
    }

    /// Returns the per-request transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the sustained requests per second. Zero disables limiting.
    #[must_use]
    pub const fn qps(&self) -> f32 {
        self.qps
    }

    /// Returns the token bucket capacity.
    #[must_use]
    pub const fn burst(&self) -> u32 {
        self.burst
    }
}

// Verify RestConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestConfig>();
};

/// Builder for constructing [`RestConfig`] instances.
///
/// `host` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - `accept_content_type`: `None`
/// - `content_type`: [`DEFAULT_CONTENT_TYPE`]
/// - `credentials`: `None`
/// - `timeout`: `None`
/// - `qps` / `burst`: [`DEFAULT_QPS`] / [`DEFAULT_BURST`]
#[derive(Debug, Default)]
pub struct RestConfigBuilder {
    host: Option<HostUrl>,
    user_agent: Option<String>,
    accept_content_type: Option<String>,
    content_type: Option<String>,
    credentials: Option<Credentials>,
    root_ca_pem: Option<Vec<u8>>,
    insecure_skip_tls_verify: bool,
    timeout: Option<Duration>,
    qps: Option<f32>,
    burst: Option<u32>,
}

impl RestConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server URL (required).
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the `Accept` header value.
    #[must_use]
    pub fn accept_content_type(mut self, accept: impl Into<String>) -> Self {
        self.accept_content_type = Some(accept.into());
        self
    }

    /// Sets the `Content-Type` used for request bodies.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the request credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Adds a PEM encoded root certificate to trust.
    #[must_use]
    pub fn root_ca_pem(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.root_ca_pem = Some(pem.into());
        self
    }

    /// Accepts any server certificate. Only meant for local testing.
    #[must_use]
    pub const fn insecure_skip_tls_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_tls_verify = insecure;
        self
    }

    /// Sets the transport-level timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the sustained requests per second. Zero disables limiting.
    #[must_use]
    pub const fn qps(mut self, qps: f32) -> Self {
        self.qps = Some(qps);
        self
    }

    /// Sets the token bucket capacity.
    #[must_use]
    pub const fn burst(mut self, burst: u32) -> Self {
        self.burst = Some(burst);
        self
    }

    /// Builds the [`RestConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `host` is not set, and
    /// [`ConfigError::InvalidRateLimit`] if `qps` is negative or not finite, or
    /// if `burst` is zero while limiting is enabled.
    pub fn build(self) -> Result<RestConfig, ConfigError> {
        let host = self
            .host
            .ok_or(ConfigError::MissingRequiredField { field: "host" })?;

        let qps = self.qps.unwrap_or(DEFAULT_QPS);
        let burst = self.burst.unwrap_or(DEFAULT_BURST);
        if !qps.is_finite() || qps < 0.0 {
            return Err(ConfigError::InvalidRateLimit {
                reason: format!("qps must be a non-negative number, got {qps}"),
            });
        }
        if qps > 0.0 && burst == 0 {
            return Err(ConfigError::InvalidRateLimit {
                reason: "burst must be at least 1 when qps is set".to_string(),
            });
        }

        Ok(RestConfig {
            host,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            accept_content_type: self.accept_content_type,
            content_type: self
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            credentials: self.credentials,
            root_ca_pem: self.root_ca_pem,
            insecure_skip_tls_verify: self.insecure_skip_tls_verify,
            timeout: self.timeout,
            qps,
            burst,
        })
    }
}

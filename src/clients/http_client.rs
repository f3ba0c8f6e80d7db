//! Reqwest-backed transport.
//!
//! This module provides the [`HttpClient`] type, which turns a
//! [`RestConfig`] into a configured reqwest client and implements the six
//! [`Transport`] verbs on top of it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use crate::clients::context::Context;
use crate::clients::errors::{HttpError, StatusError};
use crate::clients::http_request::{HttpMethod, HttpRequest, PatchType};
use crate::clients::options::{ApplyToRequest, Options};
use crate::clients::rate_limit::RateLimiter;
use crate::clients::status::Status;
use crate::clients::transport::Transport;
use crate::config::{Credentials, RestConfig};
use crate::error::ConfigError;

/// HTTP transport for a single server.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept`, `Authorization`)
/// - TLS roots and certificate verification settings
/// - Client-side rate limiting
/// - Cancellation and deadlines through [`Context`]
/// - Classification of non-2xx responses into [`StatusError`]
///
/// It never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use kube_rest::clients::{Context, HttpClient, Transport};
/// use kube_rest::RestConfig;
///
/// let config = RestConfig::for_server("https://localhost:8443")?;
/// let client = HttpClient::new(&config)?;
///
/// let body = client.get(&Context::background(), "/rest/a").await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
    base_uri: String,
    content_type: String,
    limiter: Option<RateLimiter>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a transport for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a header value cannot be encoded, the root
    /// certificate cannot be parsed, or the reqwest client cannot be built.
    pub fn new(config: &RestConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            header_value(config.user_agent(), "User-Agent")?,
        );
        if let Some(accept) = config.accept_content_type() {
            headers.insert(ACCEPT, header_value(accept, "Accept")?);
        }
        if let Some(credentials) = config.credentials() {
            let authorization = match credentials {
                Credentials::Bearer(token) => format!("Bearer {}", token.as_ref()),
                Credentials::Basic { username, password } => {
                    let encoded = STANDARD.encode(format!("{username}:{}", password.as_ref()));
                    format!("Basic {encoded}")
                }
            };
            let mut value = header_value(&authorization, "Authorization")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers);

        if let Some(pem) = config.root_ca_pem() {
            let certificate = reqwest::Certificate::from_pem(pem).map_err(|e| {
                ConfigError::InvalidCertificate {
                    reason: e.to_string(),
                }
            })?;
            builder = builder.add_root_certificate(certificate);
        }
        if config.insecure_skip_tls_verify() {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::TransportBuild {
                reason: e.to_string(),
            })?;

        let base_uri = config.host().origin().to_string();
        let base_url = reqwest::Url::parse(&base_uri).map_err(|_| ConfigError::InvalidHostUrl {
            url: base_uri.clone(),
        })?;

        Ok(Self {
            client,
            base_url,
            base_uri,
            content_type: config.content_type().to_string(),
            limiter: RateLimiter::new(config.qps(), config.burst()),
        })
    }

    /// Returns the origin every path is resolved against.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the content type sent with request bodies.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Sends a request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - `ctx` is canceled (`Canceled`) or its deadline passes (`DeadlineExceeded`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Status`)
    pub async fn request(
        &self,
        ctx: &Context,
        request: HttpRequest<'_>,
    ) -> Result<Vec<u8>, HttpError> {
        request.verify()?;
        ctx.run(self.send(request)).await
    }

    async fn send(&self, request: HttpRequest<'_>) -> Result<Vec<u8>, HttpError> {
        if let Some(limiter) = &self.limiter {
            limiter.acquire().await;
        }

        let HttpRequest {
            http_method,
            path,
            body,
            content_type,
            options,
        } = request;

        // `?` and `#` in the path are percent-encoded, never split off
        let mut url = self.base_url.clone();
        url.set_path(&path);
        let mut builder =
            options.apply_to_request(self.client.request(http_method.as_reqwest(), url.clone()));

        if let Some(body) = body {
            let content_type_from_options =
                content_type.is_none() && options.is_some_and(|o| o.has_header("content-type"));
            if !content_type_from_options {
                builder = builder.header(
                    CONTENT_TYPE,
                    content_type.unwrap_or(self.content_type.as_str()),
                );
            }
            builder = builder.body(body);
        }

        tracing::debug!("{} {}", http_method, url);
        let res = builder.send().await?;

        let code = res.status().as_u16();
        let bytes = res.bytes().await?.to_vec();
        tracing::debug!("{} {} responded {} ({} bytes)", http_method, path, code, bytes.len());

        if (200..300).contains(&code) {
            return Ok(bytes);
        }

        let status = Status::from_response(code, http_method, &path, &bytes);
        Err(StatusError::new(status, bytes).into())
    }
}

fn header_value(value: &str, name: &'static str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeaderValue { name })
}

impl Transport for HttpClient {
    async fn get(&self, ctx: &Context, path: &str) -> Result<Vec<u8>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.request(ctx, request).await
    }

    async fn list(
        &self,
        ctx: &Context,
        path: &str,
        options: Option<&Options>,
    ) -> Result<Vec<u8>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .options(options)
            .build()?;
        self.request(ctx, request).await
    }

    async fn create(
        &self,
        ctx: &Context,
        path: &str,
        body: Vec<u8>,
        options: Option<&Options>,
    ) -> Result<Vec<u8>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .options(options)
            .build()?;
        self.request(ctx, request).await
    }

    async fn update(
        &self,
        ctx: &Context,
        path: &str,
        body: Vec<u8>,
        options: Option<&Options>,
    ) -> Result<Vec<u8>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Put, path)
            .body(body)
            .options(options)
            .build()?;
        self.request(ctx, request).await
    }

    async fn patch(
        &self,
        ctx: &Context,
        path: &str,
        patch_type: PatchType,
        body: Vec<u8>,
    ) -> Result<Vec<u8>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Patch, path)
            .body(body)
            .content_type(patch_type.as_content_type())
            .build()?;
        self.request(ctx, request).await
    }

    async fn delete(
        &self,
        ctx: &Context,
        path: &str,
        options: Option<&Options>,
    ) -> Result<Vec<u8>, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .options(options)
            .build()?;
        self.request(ctx, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HostUrl, SecretToken};

    fn config() -> RestConfig {
        RestConfig::for_server("https://localhost:8443/prefix").unwrap()
    }

    #[test]
    fn test_client_construction_uses_origin() {
        let client = HttpClient::new(&config()).unwrap();

        assert_eq!(client.base_uri(), "https://localhost:8443");
        assert_eq!(client.content_type(), "application/json");
        assert!(client.limiter.is_some());
    }

    #[test]
    fn test_zero_qps_builds_without_limiter() {
        let config = RestConfig::builder()
            .host(HostUrl::new("http://localhost").unwrap())
            .qps(0.0)
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert!(client.limiter.is_none());
    }

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let config = RestConfig::builder()
            .host(HostUrl::new("http://localhost").unwrap())
            .user_agent("bad\nagent")
            .build()
            .unwrap();

        assert!(matches!(
            HttpClient::new(&config),
            Err(ConfigError::InvalidHeaderValue { name: "User-Agent" })
        ));
    }

    #[test]
    fn test_credentials_build() {
        let config = RestConfig::builder()
            .host(HostUrl::new("https://localhost").unwrap())
            .credentials(Credentials::Bearer(SecretToken::new("token").unwrap()))
            .build()
            .unwrap();
        assert!(HttpClient::new(&config).is_ok());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_ipv6_host_builds() {
        let client = HttpClient::new(&RestConfig::for_server("http://[::1]:8080").unwrap()).unwrap();
        assert_eq!(client.base_uri(), "http://[::1]:8080");
    }

    #[test]
    fn test_reserved_characters_stay_in_path() {
        let client = HttpClient::new(&config()).unwrap();
        let mut url = client.base_url.clone();
        url.set_path("/test/a#b?c");

        assert_eq!(url.path(), "/test/a%23b%3Fc");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[tokio::test]
    async fn test_invalid_path_fails_before_sending() {
        let client = HttpClient::new(&config()).unwrap();
        let result = client.get(&Context::background(), "relative").await;

        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }
}

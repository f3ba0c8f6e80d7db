//! The generic CRUD client.

use crate::clients::{Context, HttpClient, Options, Transport};
use crate::config::RestConfig;
use crate::error::ConfigError;
use crate::rest::errors::RestError;
use crate::rest::object::{Object, ObjectList};
use crate::rest::patch::Patch;

/// CRUD operations over any [`Object`], on top of a [`Transport`].
///
/// Each call performs exactly one request. On success the response body is
/// parsed back into the caller's object; on failure the object is left as
/// it was.
///
/// | call     | request                             |
/// |----------|-------------------------------------|
/// | `create` | `POST obj.type_link()`              |
/// | `update` | `PUT obj.self_link()`               |
/// | `get`    | `GET obj.self_link()`               |
/// | `list`   | `GET list.type_link()`              |
/// | `delete` | `DELETE obj.self_link()`            |
/// | `patch`  | `PATCH obj.type_link()`             |
///
/// # Example
///
/// ```rust,ignore
/// use kube_rest::{Context, Options, RestClient, RestConfig};
///
/// let config = RestConfig::for_server("https://localhost:8443")?;
/// let client = RestClient::new_for_config(&config)?;
///
/// let mut pod = Pod::named("web-0");
/// client.get(&Context::background(), &mut pod).await?;
///
/// let options = Options::new().param("dryRun", "All");
/// client.delete(&Context::background(), &pod, Some(&options)).await?;
/// ```
#[derive(Debug)]
pub struct RestClient<T = HttpClient> {
    transport: T,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a client backed by an [`HttpClient`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the transport cannot be built.
    pub fn new_for_config(config: &RestConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl<T: Transport> RestClient<T> {
    /// Creates a client over `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates `obj` on the server and refreshes it from the response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Codec`] if `obj` cannot be serialized (no request
    /// is sent) or the response cannot be parsed, and [`RestError::Http`] if
    /// the request fails.
    pub async fn create<O: Object>(
        &self,
        ctx: &Context,
        obj: &mut O,
        options: Option<&Options>,
    ) -> Result<(), RestError> {
        let body = obj.data()?;
        let res = self
            .transport
            .create(ctx, &obj.type_link(&[]), body, options)
            .await
            .map_err(RestError::from_transport)?;
        obj.parse(&res)?;
        Ok(())
    }

    /// Replaces `obj` on the server and refreshes it from the response.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn update<O: Object>(
        &self,
        ctx: &Context,
        obj: &mut O,
        options: Option<&Options>,
    ) -> Result<(), RestError> {
        let body = obj.data()?;
        let res = self
            .transport
            .update(ctx, &obj.self_link(&[]), body, options)
            .await
            .map_err(RestError::from_transport)?;
        obj.parse(&res)?;
        Ok(())
    }

    /// Refreshes `obj` from the server.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails and
    /// [`RestError::Codec`] if the response cannot be parsed.
    pub async fn get<O: Object>(&self, ctx: &Context, obj: &mut O) -> Result<(), RestError> {
        let res = self
            .transport
            .get(ctx, &obj.self_link(&[]))
            .await
            .map_err(RestError::from_transport)?;
        obj.parse(&res)?;
        Ok(())
    }

    /// Fills `list` from the server.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn list<L: ObjectList>(
        &self,
        ctx: &Context,
        list: &mut L,
        options: Option<&Options>,
    ) -> Result<(), RestError> {
        let res = self
            .transport
            .list(ctx, &list.type_link(), options)
            .await
            .map_err(RestError::from_transport)?;
        list.parse(&res)?;
        Ok(())
    }

    /// Deletes `obj` on the server. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails.
    pub async fn delete<O: Object>(
        &self,
        ctx: &Context,
        obj: &O,
        options: Option<&Options>,
    ) -> Result<(), RestError> {
        self.transport
            .delete(ctx, &obj.self_link(&[]), options)
            .await
            .map_err(RestError::from_transport)?;
        Ok(())
    }

    /// Sends `patch` for `obj` and refreshes `obj` from the response.
    ///
    /// The request goes to the object's type address, with the patch type as
    /// `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Codec`] if the patch body cannot be produced (no
    /// request is sent) or the response cannot be parsed, and
    /// [`RestError::Http`] if the request fails.
    pub async fn patch<O: Object, P: Patch + ?Sized>(
        &self,
        ctx: &Context,
        obj: &mut O,
        patch: &P,
    ) -> Result<(), RestError> {
        let body = patch.data(&*obj)?;
        let res = self
            .transport
            .patch(ctx, &obj.type_link(&[]), patch.patch_type(), body)
            .await
            .map_err(RestError::from_transport)?;
        obj.parse(&res)?;
        Ok(())
    }
}

impl<T: Transport> From<T> for RestClient<T> {
    fn from(transport: T) -> Self {
        Self::new(transport)
    }
}

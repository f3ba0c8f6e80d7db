//! The verb-level transport contract.

use std::future::Future;

use crate::clients::context::Context;
use crate::clients::errors::HttpError;
use crate::clients::http_request::PatchType;
use crate::clients::options::Options;

/// Six verb operations over raw bytes.
///
/// Each operation issues exactly one request against `path`, an absolute
/// path on the configured server, and returns the raw response body. Options
/// apply to list, create, update and delete only; patch sends its
/// [`PatchType`] as the `Content-Type` instead.
///
/// [`HttpClient`](crate::clients::HttpClient) is the reqwest-backed
/// implementation; [`RestClient`](crate::rest::RestClient) accepts any
/// implementation.
pub trait Transport: Send + Sync {
    /// `GET path`.
    fn get(
        &self,
        ctx: &Context,
        path: &str,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// `GET path` with options applied.
    fn list(
        &self,
        ctx: &Context,
        path: &str,
        options: Option<&Options>,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// `POST path` with `body`.
    fn create(
        &self,
        ctx: &Context,
        path: &str,
        body: Vec<u8>,
        options: Option<&Options>,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// `PUT path` with `body`.
    fn update(
        &self,
        ctx: &Context,
        path: &str,
        body: Vec<u8>,
        options: Option<&Options>,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// `PATCH path` with `body` sent as `patch_type`.
    fn patch(
        &self,
        ctx: &Context,
        path: &str,
        patch_type: PatchType,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;

    /// `DELETE path`.
    fn delete(
        &self,
        ctx: &Context,
        path: &str,
        options: Option<&Options>,
    ) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

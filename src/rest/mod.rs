//! Generic CRUD over addressable objects.
//!
//! This module composes a [`Transport`](crate::clients::Transport) with the
//! object capability traits:
//!
//! - **[`Object`]** / **[`ObjectList`]**: anything that knows its addresses
//!   and can serialize and parse itself
//! - **[`Patch`]**: a patch body plus its [`PatchType`](crate::clients::PatchType),
//!   with [`ConstantPatch`], [`MergeFromPatch`] and [`ApplyPatch`] provided
//! - **[`RestClient`]**: create, update, get, list, delete and patch
//! - **[`RestError`]**: codec and transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use kube_rest::rest::{merge_from, RestClient};
//! use kube_rest::{Context, RestConfig};
//!
//! let client = RestClient::new_for_config(&RestConfig::for_server("https://localhost:8443")?)?;
//! let ctx = Context::background();
//!
//! let mut item = Item::named("a");
//! client.get(&ctx, &mut item).await?;
//!
//! let patch = merge_from(&item);
//! item.id = "b1".to_string();
//! client.patch(&ctx, &mut item, &patch).await?;
//! ```

mod client;
mod errors;
mod merge;
mod object;
mod patch;
mod path;

pub use client::RestClient;
pub use errors::{CodecError, RestError};
pub use merge::create_merge_patch;
pub use object::{parse_json_into, to_json, Object, ObjectList};
pub use patch::{merge_from, ApplyPatch, ConstantPatch, MergeFromPatch, Patch};
pub use path::join_path;

//! # kube-rest
//!
//! A minimal generic REST client for Kubernetes-style object APIs: create,
//! read, update, list, delete and patch any resource type over HTTP, without
//! knowing its schema.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe transport configuration via [`RestConfig`] and [`RestConfigBuilder`]
//! - A six-verb HTTP [`Transport`] with a reqwest-backed implementation, [`HttpClient`]
//! - Per-call headers and query parameters via [`Options`]
//! - Cooperative cancellation and deadlines via [`Context`]
//! - The [`Object`] / [`ObjectList`] capability traits any resource can implement
//! - Constant, merge-from and apply [`Patch`] strategies
//! - A generic [`RestClient`] tying it all together
//!
//! ## Quick Start
//!
//! ```rust
//! use kube_rest::{RestConfig, RestClient};
//!
//! let config = RestConfig::for_server("https://localhost:8443").unwrap();
//! assert_eq!(config.qps(), 20.0);
//! assert_eq!(config.burst(), 30);
//!
//! let client = RestClient::new_for_config(&config).unwrap();
//! ```
//!
//! ## Implementing an Object
//!
//! ```rust
//! use kube_rest::rest::{join_path, parse_json_into, to_json};
//! use kube_rest::{CodecError, Object};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Default, Serialize, Deserialize)]
//! struct Item {
//!     name: String,
//!     id: String,
//! }
//!
//! impl Object for Item {
//!     fn type_link(&self, segments: &[&str]) -> String {
//!         join_path("/test", segments)
//!     }
//!
//!     fn self_link(&self, segments: &[&str]) -> String {
//!         let mut all = vec![self.name.as_str()];
//!         all.extend_from_slice(segments);
//!         self.type_link(&all)
//!     }
//!
//!     fn data(&self) -> Result<Vec<u8>, CodecError> {
//!         to_json(self)
//!     }
//!
//!     fn parse(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
//!         parse_json_into(self, bytes)
//!     }
//! }
//! ```
//!
//! ## Making Calls
//!
//! ```rust,ignore
//! use kube_rest::{Context, Options, PatchType, RestClient, RestConfig};
//! use kube_rest::rest::{merge_from, ConstantPatch};
//! use std::time::Duration;
//!
//! let client = RestClient::new_for_config(&RestConfig::for_server("https://localhost:8443")?)?;
//! let ctx = Context::background().with_timeout(Duration::from_secs(10));
//!
//! let mut item = Item { name: "a".into(), id: "b".into() };
//! client.create(&ctx, &mut item, None).await?;
//!
//! let mut items = ItemList::default();
//! client.list(&ctx, &mut items, Some(&Options::new().param("filter", "a"))).await?;
//!
//! let patch = merge_from(&item);
//! item.id = "b1".into();
//! client.patch(&ctx, &mut item, &patch).await?;
//!
//! client.patch(&ctx, &mut item, &ConstantPatch::new(PatchType::Merge, r#"{"id":"b2"}"#)).await?;
//!
//! client.delete(&ctx, &item, None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No retries**: every call is exactly one request; failures go to the caller

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{Credentials, HostUrl, RestConfig, RestConfigBuilder, SecretToken};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    Context, HttpClient, HttpError, HttpMethod, Options, PatchType, StatusError, StatusReason,
    Transport,
};

// Re-export CRUD types
pub use rest::{
    ApplyPatch, CodecError, ConstantPatch, MergeFromPatch, Object, ObjectList, Patch, RestClient,
    RestError,
};

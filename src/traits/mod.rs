//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET against the remote API
//! - [`KeyValueStore`] - String-keyed persistent storage for favorites

pub mod http;
pub mod store;

pub use http::{HttpClient, HttpError, Response};
pub use store::{KeyValueStore, StoreError};

//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`JsonFileStore`] - Key-value store persisted as a JSON file
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryStore`] - In-memory key-value storage

pub mod json_file_store;
pub mod mock;
pub mod reqwest_http;

pub use json_file_store::JsonFileStore;
pub use mock::{InMemoryStore, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;

//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - In-memory key-value storage

pub mod http;
pub mod store;

pub use http::{MockHttpClient, MockResponse};
pub use store::InMemoryStore;

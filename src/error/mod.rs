//! Error types for the Pokémon browser.
//!
//! - [`FetchError`]: a list or detail load failed; shown to the user as an alert
//! - [`StoreError`]: favorites storage failed; logged, never shown
//!
//! Both carry a `thiserror` `Display` for logs. What the user sees comes from
//! [`FetchError::user_message`], which only distinguishes "not found" from
//! everything else.

mod fetch;

pub use crate::traits::StoreError;
pub use fetch::{FetchError, MSG_NOT_FOUND, MSG_REQUEST_FAILED};

//! Key-value storage trait abstraction.
//!
//! The favorites set lives in a string-keyed store, the way a browser page
//! would use local storage. Production code uses a JSON file on disk; tests
//! use an in-memory map.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data could not be (de)serialized
    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for string-keyed persistent storage.
///
/// Values are opaque strings; callers own their serialization format.
/// Every `set` overwrites the previous value for that key in full.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    /// - `Err(error)` if the store could not be read
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

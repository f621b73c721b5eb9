//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::PageLoad;

use super::LoadRequest;

/// Completions sent back from spawned load tasks.
///
/// Every message carries the sequence number its load was issued with; the
/// app ignores any that are not the latest.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A load resolved every item
    PageLoaded {
        seq: u64,
        request: LoadRequest,
        load: PageLoad,
    },
    /// A load failed; nothing from it is applied
    LoadFailed {
        seq: u64,
        request: LoadRequest,
        error: FetchError,
    },
}

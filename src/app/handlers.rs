//! Message handling for the App.

use super::{Alert, App, AppMessage};

impl App {
    /// Handle a load completion.
    ///
    /// Completions from superseded loads are dropped without touching state
    /// or raising an alert.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::PageLoaded { seq, request, load } => {
                let count = load.items.len();
                if !self.state.apply_load(seq, load) {
                    tracing::debug!("Discarding stale load #{} ({:?})", seq, request);
                    return;
                }
                tracing::debug!("Applied load #{}: {} items", seq, count);
                self.shown = Some(request);
                self.selected = 0;
            }
            AppMessage::LoadFailed {
                seq,
                request,
                error,
            } => {
                if !self.state.fail_load(seq) {
                    tracing::debug!("Discarding stale failure #{}: {}", seq, error);
                    return;
                }
                tracing::warn!("Load #{} ({:?}) failed: {}", seq, request, error);
                self.alert = Some(Alert::new(error.user_message()));
            }
        }
    }
}

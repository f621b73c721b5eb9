//! Mouse interaction for the TUI.
//!
//! Components register clickable regions while rendering; the event loop
//! hit-tests mouse clicks against the registry and hands the resulting
//! [`ClickAction`] to `App::handle_click`.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};

//! Input handling for keyboard events.
//!
//! ```text
//! KeyEvent -> KeybindingConfig::resolve() -> Command -> App::dispatch()
//! ```
//!
//! Mouse clicks bypass this layer: they are hit-tested against the areas
//! registered during rendering and go to `App::handle_click`.

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};

//! Default keybindings for the application.
//!
//! Bindings are looked up in three layers: the alert dialog (when one is
//! open) swallows everything, then global bindings, then the layer for the
//! focused component.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Focus;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Normalize a key event. Shift is dropped for characters since the
    /// character itself already carries the case.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active (outside the alert)
    pub global: HashMap<KeyCombo, Command>,
    /// Active while the item list or favorites panel has focus
    pub browse: HashMap<KeyCombo, Command>,
    /// Active while the search box has focus; unbound characters are typed
    pub search: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut global = HashMap::new();
        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        global.insert(KeyCombo::plain(KeyCode::Tab), Command::CycleFocus);
        global.insert(KeyCombo::plain(KeyCode::PageDown), Command::NextPage);
        global.insert(KeyCombo::plain(KeyCode::PageUp), Command::PrevPage);

        let mut browse = HashMap::new();
        browse.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        browse.insert(KeyCombo::plain(KeyCode::Char('n')), Command::NextPage);
        browse.insert(KeyCombo::plain(KeyCode::Right), Command::NextPage);
        browse.insert(KeyCombo::plain(KeyCode::Char('p')), Command::PrevPage);
        browse.insert(KeyCombo::plain(KeyCode::Left), Command::PrevPage);
        browse.insert(KeyCombo::plain(KeyCode::Char('r')), Command::Reset);
        browse.insert(KeyCombo::plain(KeyCode::Char('/')), Command::FocusSearch);
        browse.insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext);
        browse.insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        browse.insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrev);
        browse.insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrev);
        browse.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleSelected);
        browse.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleSelected);
        browse.insert(KeyCombo::plain(KeyCode::Char('f')), Command::ToggleSelected);
        browse.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenImage);

        let mut search = HashMap::new();
        search.insert(KeyCombo::plain(KeyCode::Enter), Command::SubmitSearch);
        search.insert(KeyCombo::plain(KeyCode::Esc), Command::LeaveInput);
        search.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);

        Self {
            global,
            browse,
            search,
        }
    }

    /// Resolve a key event to a command for the given UI state.
    pub fn resolve(&self, key: &KeyEvent, focus: Focus, alert_open: bool) -> Command {
        let combo = KeyCombo::from_event(key);

        if alert_open {
            return match combo.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Command::DismissAlert,
                _ if combo == KeyCombo::ctrl(KeyCode::Char('c')) => Command::Quit,
                _ => Command::None,
            };
        }

        if let Some(cmd) = self.global.get(&combo) {
            return *cmd;
        }

        match focus {
            Focus::Search => match self.search.get(&combo) {
                Some(cmd) => *cmd,
                None => match combo.code {
                    KeyCode::Char(c) if combo.modifiers.is_empty() => Command::InputChar(c),
                    _ => Command::None,
                },
            },
            Focus::List | Focus::Favorites => {
                self.browse.get(&combo).copied().unwrap_or(Command::None)
            }
        }
    }
}

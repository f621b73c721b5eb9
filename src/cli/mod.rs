//! Command-line interface.
//!
//! The dispatcher runs before the TUI starts; every command except
//! [`CliCommand::RunTui`] finishes without touching the terminal:
//!
//! ```ignore
//! use pokedex::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod favorites;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use favorites::{handle_clear_favorites, handle_list_favorites, write_favorites};
pub use version::{handle_version_command, VERSION};

use std::sync::Arc;

use color_eyre::Result;

use crate::adapters::JsonFileStore;
use crate::config::Config;
use crate::favorites::FavoritesStore;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` never returns.
pub fn run_cli_command(command: CliCommand, config: &Config) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::ListFavorites => Some(handle_list_favorites(&favorites_store(config))),
        CliCommand::ClearFavorites => Some(handle_clear_favorites(&favorites_store(config))),
        CliCommand::RunTui => None,
    }
}

fn favorites_store(config: &Config) -> FavoritesStore {
    FavoritesStore::new(Arc::new(JsonFileStore::in_dir(&config.data_dir())))
}

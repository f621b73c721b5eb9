//! Command-line argument parsing.
//!
//! Flags are matched anywhere after the program name; the first recognized
//! flag wins. Anything unrecognized falls through to the TUI.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print persisted favorites
    ListFavorites,
    /// Delete persisted favorites
    ClearFavorites,
    /// Run the TUI application (default)
    RunTui,
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Browse Pokémon in the terminal.

Usage: pokedex [OPTIONS]

Options:
      --favorites        Print saved favorites and exit
      --clear-favorites  Delete saved favorites and exit
  -h, --help             Print help
  -V, --version          Print version

Environment:
  POKEDEX_API_URL    Base URL of the pokemon endpoint
  POKEDEX_PAGE_SIZE  Items per page (default 10)
  POKEDEX_DATA_DIR   Where favorites and logs live (default ~/.pokedex)
  POKEDEX_LOG        tracing filter (default info)
";

/// Parse command-line arguments and return the appropriate command.
///
/// ```
/// use pokedex::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pokedex".to_string(), "--favorites".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::ListFavorites);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--favorites" => return CliCommand::ListFavorites,
            "--clear-favorites" => return CliCommand::ClearFavorites,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["pokedex".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_favorites_flags() {
        assert_eq!(parse(&["--favorites"]), CliCommand::ListFavorites);
        assert_eq!(parse(&["--clear-favorites"]), CliCommand::ClearFavorites);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag_then_known() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui);
        assert_eq!(parse(&["--unknown", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--favorites", "--clear-favorites", "--help", "--version"] {
            assert!(USAGE.contains(flag), "{}", flag);
        }
    }
}

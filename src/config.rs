//! Runtime configuration.
//!
//! Defaults target the public PokeAPI. Each field can be overridden through
//! the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `POKEDEX_API_URL` | `api_base_url` | `https://pokeapi.co/api/v2/pokemon` |
//! | `POKEDEX_PAGE_SIZE` | `page_size` | `10` |
//! | `POKEDEX_DATA_DIR` | `data_dir` | `~/.pokedex` |
//! | `POKEDEX_LOG` | `log_filter` | `info` |

use std::path::PathBuf;

/// Base URL of the Pokémon resource.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Items per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Data directory name under the home directory.
const DATA_DIR_NAME: &str = ".pokedex";

/// Log file name inside the data directory.
const LOG_FILE: &str = "pokedex.log";

pub const ENV_API_URL: &str = "POKEDEX_API_URL";
pub const ENV_PAGE_SIZE: &str = "POKEDEX_PAGE_SIZE";
pub const ENV_DATA_DIR: &str = "POKEDEX_DATA_DIR";
pub const ENV_LOG: &str = "POKEDEX_LOG";

/// Application configuration.
///
/// Use the builder methods to customize.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use pokedex::adapters::MockHttpClient;
/// use pokedex::config::Config;
/// use pokedex::fetcher::Fetcher;
///
/// let config = Config::default()
///     .with_page_size(20)
///     .with_api_base_url("http://localhost:8080/pokemon");
/// let fetcher = Fetcher::from_config(Arc::new(MockHttpClient::new()), &config);
/// assert_eq!(fetcher.initial_url(), "http://localhost:8080/pokemon?limit=20");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the Pokémon resource (no trailing slash)
    pub api_base_url: String,
    /// Items requested per list page
    pub page_size: u32,
    /// Where storage and logs live; `None` means `~/.pokedex`
    pub data_dir: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Environment values that were rejected while building the config.
    ///
    /// Collected rather than logged on the spot because the config is read
    /// before the tracing subscriber exists; see [`Config::log_warnings`].
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a Config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a Config from an arbitrary variable lookup.
    ///
    /// Empty values are ignored. An unparsable or zero page size falls back
    /// to the default and is recorded in [`Config::warnings`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_base_url(&url);
        }

        if let Some(raw) = get(ENV_PAGE_SIZE) {
            match raw.parse::<u32>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => config.warnings.push(format!(
                    "Ignoring invalid {}={:?}, using {}",
                    ENV_PAGE_SIZE, raw, DEFAULT_PAGE_SIZE
                )),
            }
        }

        if let Some(dir) = get(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        config
    }

    /// Set the API base URL. A trailing slash is stripped.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Resolved data directory.
    ///
    /// Falls back to `./.pokedex` when the home directory is unknown.
    pub fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .map(|home| home.join(DATA_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from(DATA_DIR_NAME)),
        }
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join(LOG_FILE)
    }

    /// Emit every collected warning. Call once tracing is initialized.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:9000/pokemon/"),
            (ENV_PAGE_SIZE, "25"),
            (ENV_DATA_DIR, "/tmp/pokedex-data"),
            (ENV_LOG, "pokedex=debug"),
        ]));

        assert_eq!(config.api_base_url, "http://localhost:9000/pokemon");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/pokedex-data"));
        assert_eq!(
            config.log_path(),
            PathBuf::from("/tmp/pokedex-data/pokedex.log")
        );
        assert_eq!(config.log_filter, "pokedex=debug");
    }

    #[test]
    fn test_from_lookup_rejects_bad_page_size() {
        for raw in ["0", "-3", "ten", "  "] {
            let config = Config::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, raw)]));
            assert_eq!(config.page_size, DEFAULT_PAGE_SIZE, "input {:?}", raw);
        }
    }

    #[test]
    fn test_bad_page_size_is_kept_as_warning() {
        let config = Config::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "ten")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains(ENV_PAGE_SIZE));
        assert!(config.warnings[0].contains("\"ten\""));

        let valid = Config::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "12")]));
        assert!(valid.warnings.is_empty());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_warnings_reaches_subscriber() {
        let config = Config::from_lookup(lookup_from(&[(ENV_PAGE_SIZE, "0")]));
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || config.log_warnings());

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("POKEDEX_PAGE_SIZE=\"0\""));
    }

    #[test]
    fn test_from_lookup_ignores_empty_values() {
        let config = Config::from_lookup(lookup_from(&[(ENV_API_URL, ""), (ENV_LOG, " ")]));
        assert_eq!(config, Config::default());
    }
}

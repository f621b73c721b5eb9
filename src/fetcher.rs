//! Resolves pages of Pokémon from the remote API.
//!
//! A page is resolved in two steps: first a list of detail URLs (from a list
//! envelope or a single name lookup), then every detail fetched in parallel.
//! The fetcher only returns data; applying it to state is the caller's job.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{Item, ListEnvelope, PageLoad, PokemonDetail};
use crate::traits::{HttpClient, Response};

/// Client for the list and detail endpoints.
#[derive(Clone)]
pub struct Fetcher {
    client: Arc<dyn HttpClient>,
    base_url: String,
    page_size: u32,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl Fetcher {
    pub fn new(client: Arc<dyn HttpClient>, base_url: &str, page_size: u32) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        }
    }

    pub fn from_config(client: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self::new(client, &config.api_base_url, config.page_size)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// `<base>?limit=<page_size>`
    pub fn initial_url(&self) -> String {
        format!("{}?limit={}", self.base_url, self.page_size)
    }

    /// `<base>/<name>`, with the name percent-encoded as a path segment.
    pub fn detail_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(name))
    }

    /// Load the list page at `cursor_url` and resolve all of its items.
    ///
    /// The cursor is used verbatim.
    pub async fn load_page(&self, cursor_url: &str) -> Result<PageLoad, FetchError> {
        tracing::debug!("Loading page {}", cursor_url);

        let response = self.get_ok(cursor_url).await?;
        let envelope: ListEnvelope = parse(cursor_url, &response)?;
        let urls: Vec<String> = envelope.results.into_iter().map(|entry| entry.url).collect();

        let items = self.resolve_details(&urls).await?;
        tracing::info!("Loaded page of {} items from {}", items.len(), cursor_url);

        Ok(PageLoad {
            next: envelope.next,
            previous: envelope.previous,
            items,
        })
    }

    /// Resolve a single Pokémon by name. Search results have no cursors.
    ///
    /// `name` is expected to be trimmed and lower-cased already.
    pub async fn load_by_name(&self, name: &str) -> Result<PageLoad, FetchError> {
        let url = self.detail_url(name);
        tracing::debug!("Searching {:?} via {}", name, url);

        let items = self.resolve_details(&[url]).await?;
        Ok(PageLoad {
            next: None,
            previous: None,
            items,
        })
    }

    /// Fetch every detail URL concurrently, all-or-nothing.
    ///
    /// Order of the result matches `urls`. The first failure aborts the
    /// whole batch.
    pub async fn resolve_details(&self, urls: &[String]) -> Result<Vec<Item>, FetchError> {
        try_join_all(urls.iter().map(|url| self.fetch_item(url))).await
    }

    async fn fetch_item(&self, url: &str) -> Result<Item, FetchError> {
        let response = self.get_ok(url).await?;
        let detail: PokemonDetail = parse(url, &response)?;
        Ok(detail.into_item())
    }

    /// GET that maps non-2xx statuses to `FetchError`.
    async fn get_ok(&self, url: &str) -> Result<Response, FetchError> {
        let response = self.client.get(url).await?;
        if !response.is_success() {
            tracing::warn!("GET {} returned HTTP {}", url, response.status);
            return Err(FetchError::from_status(url, response.status));
        }
        Ok(response)
    }
}

fn parse<T: serde::de::DeserializeOwned>(url: &str, response: &Response) -> Result<T, FetchError> {
    response.json().map_err(|e| FetchError::InvalidResponse {
        url: url.to_string(),
        message: e.to_string(),
    })
}

//! Shared fixtures for integration tests.
//!
//! Two flavors of backend are provided: a `wiremock` server speaking the
//! real list/detail JSON, and the in-process `MockHttpClient` for tests that
//! need to count requests or control timing exactly.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokedex::adapters::mock::{InMemoryStore, MockHttpClient};
use pokedex::adapters::ReqwestHttpClient;
use pokedex::app::App;
use pokedex::config::Config;

/// Path of the pokemon endpoint on the mock server.
pub const API_PATH: &str = "/api/v2/pokemon";

/// Base URL used with `MockHttpClient`.
pub const MOCK_BASE: &str = "https://pokeapi.test/api/v2/pokemon";

pub fn artwork_url(name: &str) -> String {
    format!("https://img.pokeapi.test/home/{}.png", name)
}

/// A detail body with the nested home artwork present.
pub fn detail_json(name: &str) -> Value {
    json!({
        "id": 1,
        "name": name,
        "sprites": {
            "front_default": "ignored.png",
            "other": {"home": {"front_default": artwork_url(name)}}
        }
    })
}

/// A list envelope whose entries point at `<base>/<name>/`.
pub fn list_json(base: &str, names: &[&str], next: Option<&str>, previous: Option<&str>) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|n| json!({"name": n, "url": format!("{}/{}/", base, n)}))
        .collect();
    json!({
        "count": 1302,
        "next": next,
        "previous": previous,
        "results": results
    })
}

pub fn server_base(server: &MockServer) -> String {
    format!("{}{}", server.uri(), API_PATH)
}

/// Config pointing at the mock server with the given page size.
pub fn server_config(server: &MockServer, page_size: u32) -> Config {
    Config::new()
        .with_api_base_url(&server_base(server))
        .with_page_size(page_size)
}

/// Mount the first page (`?limit=N`, no offset) and its details.
pub async fn mount_first_page(server: &MockServer, names: &[&str], next: Option<&str>) {
    let base = server_base(server);
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(&base, names, next, None)))
        .mount(server)
        .await;
    for name in names {
        mount_detail(server, name).await;
    }
}

/// Mount the page at `?offset=<offset>` and its details.
pub async fn mount_offset_page(
    server: &MockServer,
    offset: &str,
    names: &[&str],
    next: Option<&str>,
    previous: Option<&str>,
) {
    let base = server_base(server);
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("offset", offset))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_json(&base, names, next, previous)),
        )
        .mount(server)
        .await;
    for name in names {
        mount_detail(server, name).await;
    }
}

/// Mount `<base>/<name>/` (list entry form) and `<base>/<name>` (search form).
pub async fn mount_detail(server: &MockServer, name: &str) {
    for p in [format!("{}/{}/", API_PATH, name), format!("{}/{}", API_PATH, name)] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_json(detail_json(name)))
            .mount(server)
            .await;
    }
}

pub async fn mount_status(server: &MockServer, p: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(p))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// App wired to the mock server with a fresh in-memory store.
pub fn server_app(server: &MockServer, page_size: u32) -> (App, InMemoryStore) {
    let store = InMemoryStore::new();
    let app = App::new(
        &server_config(server, page_size),
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(store.clone()),
    );
    (app, store)
}

/// App wired to a `MockHttpClient` with page size 2.
pub fn mock_app(client: &MockHttpClient, store: &InMemoryStore) -> App {
    App::new(
        &Config::new().with_api_base_url(MOCK_BASE).with_page_size(2),
        Arc::new(client.clone()),
        Arc::new(store.clone()),
    )
}

/// Register a list page and its details on a `MockHttpClient`.
pub fn mock_page(client: &MockHttpClient, url: &str, names: &[&str], next: Option<&str>) {
    client.set_json(url, 200, list_json(MOCK_BASE, names, next, None));
    for name in names {
        client.set_json(&format!("{}/{}/", MOCK_BASE, name), 200, detail_json(name));
    }
}

pub fn names(app: &App) -> Vec<&str> {
    app.state.items.iter().map(|i| i.name.as_str()).collect()
}

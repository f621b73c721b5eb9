//! `Fetcher` against a real HTTP stack (reqwest + wiremock).

mod common;

use std::sync::Arc;

use common::*;
use pokedex::adapters::ReqwestHttpClient;
use pokedex::error::FetchError;
use pokedex::fetcher::Fetcher;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(server: &MockServer, page_size: u32) -> Fetcher {
    Fetcher::new(
        Arc::new(ReqwestHttpClient::new()),
        &server_base(server),
        page_size,
    )
}

#[tokio::test]
async fn test_load_page_over_http() {
    let server = MockServer::start().await;
    let next = format!("{}?offset=3&limit=3", server_base(&server));
    mount_first_page(&server, &["bulbasaur", "ivysaur", "venusaur"], Some(&next)).await;

    let fetcher = fetcher(&server, 3);
    let page = fetcher.load_page(&fetcher.initial_url()).await.unwrap();

    let names: Vec<_> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    assert_eq!(page.next.as_deref(), Some(next.as_str()));
    assert!(page.previous.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].url.query(), Some("limit=3"));
}

#[tokio::test]
async fn test_missing_artwork_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/missingno", API_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "missingno",
            "sprites": {"front_default": null, "other": {"home": {"front_default": null}}}
        })))
        .mount(&server)
        .await;

    let page = fetcher(&server, 10).load_by_name("missingno").await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert!(page.items[0].image.is_none());
}

#[tokio::test]
async fn test_search_404_is_not_found() {
    let server = MockServer::start().await;
    mount_status(&server, &format!("{}/xyzabc", API_PATH), 404).await;

    let err = fetcher(&server, 10).load_by_name("xyzabc").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Pokemon not found");
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let server = MockServer::start().await;
    mount_status(&server, API_PATH, 500).await;

    let fetcher = fetcher(&server, 10);
    let err = fetcher.load_page(&fetcher.initial_url()).await.unwrap_err();
    assert!(matches!(err, FetchError::RequestFailed { status: 500, .. }));
    assert_eq!(err.user_message(), "An error occurred with the request");
}

#[tokio::test]
async fn test_html_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let fetcher = fetcher(&server, 10);
    let err = fetcher.load_page(&fetcher.initial_url()).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let base = format!("http://127.0.0.1:{}{}", port, API_PATH);

    let fetcher = Fetcher::new(Arc::new(ReqwestHttpClient::new()), &base, 10);
    let err = fetcher.load_by_name("pikachu").await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert_eq!(err.user_message(), "An error occurred with the request");
}

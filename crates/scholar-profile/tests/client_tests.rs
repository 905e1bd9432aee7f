//! HTTP client tests using wiremock.
//!
//! These tests fill profiles over real HTTP against a mock profile site.

mod common;

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::ProfilePage;
use scholar_profile::error::ClientError;
use scholar_profile::{Author, Config, DocumentFetcher, ProfileError, ScholarClient, Section};

const ID: &str = "4bahYMkAAAAJ";

fn setup_client(mock_server: &MockServer) -> ScholarClient {
    ScholarClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

/// Mount the first profile page, expected to be fetched `times` times.
async fn mount_first_page(mock_server: &MockServer, page: &ProfilePage, times: u64) {
    Mock::given(method("GET"))
        .and(path("/citations"))
        .and(query_param("user", ID))
        .and(query_param("pagesize", "100"))
        .and(query_param_is_missing("cstart"))
        .respond_with(html(page.render()))
        .expect(times)
        .mount(mock_server)
        .await;
}

async fn mount_later_page(mock_server: &MockServer, cstart: &str, page: &ProfilePage) {
    Mock::given(method("GET"))
        .and(path("/citations"))
        .and(query_param("user", ID))
        .and(query_param("cstart", cstart))
        .respond_with(html(page.render()))
        .expect(1)
        .mount(mock_server)
        .await;
}

// =============================================================================
// Fetching
// =============================================================================

#[tokio::test]
async fn test_fetch_page_composes_relative_path() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/citations"))
        .and(query_param("hl", "en"))
        .and(query_param("user", "abc"))
        .respond_with(html("<html>ok</html>".to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let body = client.fetch_page("/citations?hl=en&user=abc").await.unwrap();

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "scholar-profile-tests"))
        .respond_with(html(String::new()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    client.fetch_page("/citations?user=abc").await.unwrap();
}

#[tokio::test]
async fn test_client_through_trait_object() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html("<p>x</p>".to_string()))
        .mount(&mock_server)
        .await;

    let fetcher: std::sync::Arc<dyn DocumentFetcher> = std::sync::Arc::new(setup_client(&mock_server));
    assert_eq!(fetcher.fetch_page("/anything").await.unwrap(), "<p>x</p>");
}

// =============================================================================
// Error Mapping
// =============================================================================

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).fetch_page("/citations?user=gone").await.unwrap_err();

    match err {
        ClientError::NotFound { resource } => assert!(resource.ends_with("/citations?user=gone")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_429_maps_to_rate_limited() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).fetch_page("/citations?user=abc").await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
}

#[tokio::test]
async fn test_429_without_header_defaults_to_a_minute() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).fetch_page("/citations?user=abc").await.unwrap_err();
    assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn test_500_maps_to_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).fetch_page("/citations?user=abc").await.unwrap_err();

    match err {
        ClientError::Server { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_403_maps_to_unexpected_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("captcha"))
        .mount(&mock_server)
        .await;

    let err = setup_client(&mock_server).fetch_page("/citations?user=abc").await.unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedStatus { status: 403, .. }));
    assert!(!err.is_retryable());
}

// =============================================================================
// Fill Over HTTP
// =============================================================================

#[tokio::test]
async fn test_fill_all_over_http() {
    let mock_server = MockServer::start().await;
    mount_first_page(&mock_server, &ProfilePage::default(), 1).await;

    let client = setup_client(&mock_server);
    let mut author = Author::new(ID);
    author.fill::<_, &str>(&client, &[]).await.unwrap();

    assert_eq!(author.name(), Some("Steven A. Cholewiak, PhD"));
    assert_eq!(author.hindex(), Some(8));
    assert_eq!(author.cites_per_year().unwrap().len(), 2);
    assert_eq!(author.coauthors().unwrap().len(), 2);
    assert_eq!(author.publications().unwrap().len(), 2);
}

#[tokio::test]
async fn test_fill_paginates_over_http() {
    let mock_server = MockServer::start().await;
    let first = ProfilePage { rows: vec!["A", "B"], more: Some(true), ..ProfilePage::default() };
    mount_first_page(&mock_server, &first, 1).await;
    mount_later_page(&mock_server, "100", &ProfilePage::rows_only(vec!["C"], true)).await;
    mount_later_page(&mock_server, "200", &ProfilePage::rows_only(vec!["D"], false)).await;

    let client = setup_client(&mock_server);
    let mut author = Author::new(ID);
    author.fill_sections(&client, &[Section::Publications]).await.unwrap();

    let publications = author.publications().unwrap();
    assert_eq!(publications.len(), 4);
    assert_eq!(publications[2].title, "C");
    assert_eq!(publications[0].author_pub_id.as_deref(), Some("4bahYMkAAAAJ:pub0"));
    assert!(author.is_section_filled(Section::Publications));
}

#[tokio::test]
async fn test_coauthor_stubs_trigger_no_requests() {
    let mock_server = MockServer::start().await;
    mount_first_page(&mock_server, &ProfilePage::default(), 2).await;

    let client = setup_client(&mock_server);
    let mut author = Author::new(ID);
    author.fill(&client, &["coauthors"]).await.unwrap();
    author.fill(&client, &["coauthors"]).await.unwrap();

    assert_eq!(author.coauthors().unwrap().len(), 2);
    // No request ever targets a co-author profile
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.query().unwrap_or_default().contains(ID)));
}

#[tokio::test]
async fn test_fill_surfaces_http_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let mut author = Author::new(ID);
    let err = author.fill(&client, &["basics"]).await.unwrap_err();

    assert!(matches!(err, ProfileError::Fetch(ClientError::NotFound { .. })));
    assert!(author.name().is_none());
}

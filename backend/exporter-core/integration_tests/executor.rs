use crate::helpers::{blocking, executor, garbage_server, refused_url};

use exporter_core::{
    Attachment, ExporterConfig, RequestErrorKind, RequestExecutor, RequestPayload,
};

use common::HttpMethod;

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A successful call carries status, headers and body together.
///
/// **WHY THIS MATTERS**: The panel shows all three after a request. A result with a status
/// but no headers would render as half a response.
#[tokio::test]
async fn given_created_response_when_executed_then_status_headers_body_present() {
    // GIVEN: A server answering 201 with JSON
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3dobjects"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"{"id":"42"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/3dobjects", server.uri())).unwrap();

    // WHEN: Executing a GET
    let result = blocking(move || {
        executor(Duration::from_secs(5)).execute(
            HttpMethod::Get,
            &url,
            &BTreeMap::new(),
            RequestPayload::Empty,
        )
    })
    .await;

    // THEN: Every data field is present and no error field is
    assert!(result.successful());
    assert_eq!(result.status_code().unwrap().0, 201);
    assert_eq!(result.status_label().as_deref(), Some("[201]"));
    assert_eq!(
        result.headers().unwrap().get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(result.body().unwrap(), br#"{"id":"42"}"#);
    assert!(result.error_kind().is_none());
    assert!(result.error_message().is_none());
}

#[tokio::test]
async fn given_json_body_when_posted_then_server_receives_json_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("X-Trace", "abc"))
        .and(body_json(json!({"name": "tower"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/items", server.uri())).unwrap();
    let mut headers = BTreeMap::new();
    headers.insert("X-Trace".to_string(), "abc".to_string());

    let result = blocking(move || {
        executor(Duration::from_secs(5)).execute(
            HttpMethod::Post,
            &url,
            &headers,
            RequestPayload::Json(json!({"name": "tower"})),
        )
    })
    .await;

    assert!(result.successful());
}

/// **VALUE**: Error statuses are still responses, not failures.
///
/// **BUG THIS CATCHES**: Would catch calling `error_for_status()`, which would hide the
/// server's 404 body from the artist behind a generic HTTP error.
#[tokio::test]
async fn given_not_found_when_executed_then_successful_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/models/1", server.uri())).unwrap();

    let result = blocking(move || {
        executor(Duration::from_secs(5)).execute(
            HttpMethod::Delete,
            &url,
            &BTreeMap::new(),
            RequestPayload::Empty,
        )
    })
    .await;

    assert!(result.successful());
    assert!(result.status_code().unwrap().is_client_error());
    assert_eq!(result.body().unwrap(), b"missing");
}

/// **VALUE**: A slow server yields a TimeoutError result instead of hanging or panicking.
///
/// **WHY THIS MATTERS**: The call blocks the host UI thread. The timeout is the only thing
/// that gives control back to the artist.
#[tokio::test]
async fn given_slow_server_when_executed_then_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    let url = Url::parse(&server.uri()).unwrap();

    let result = blocking(move || {
        executor(Duration::from_millis(300)).execute(
            HttpMethod::Get,
            &url,
            &BTreeMap::new(),
            RequestPayload::Empty,
        )
    })
    .await;

    assert!(!result.successful());
    assert_eq!(result.error_kind(), Some(RequestErrorKind::Timeout));
    assert!(result.status_code().is_none());
    assert!(result.headers().is_none());
    assert!(result.body().is_none());
    assert!(result.error().unwrap().log_line().starts_with("Timeout Error: "));
}

#[tokio::test]
async fn given_nothing_listening_when_executed_then_connection_error() {
    let url = Url::parse(&refused_url()).unwrap();

    let result = blocking(move || {
        executor(Duration::from_secs(5)).execute(
            HttpMethod::Get,
            &url,
            &BTreeMap::new(),
            RequestPayload::Empty,
        )
    })
    .await;

    assert_eq!(result.error_kind(), Some(RequestErrorKind::Connection));
    assert!(
        result
            .error()
            .unwrap()
            .log_line()
            .starts_with("Connection Error: ")
    );
}

/// **VALUE**: A peer that answers with non-HTTP bytes is reported as an HTTP error.
///
/// **BUG THIS CATCHES**: Would catch protocol failures falling through to UnknownError,
/// or being mistaken for connection failures because they surface on the same socket.
#[tokio::test]
async fn given_non_http_peer_when_executed_then_http_error() {
    let url = Url::parse(&garbage_server()).unwrap();

    let result = blocking(move || {
        executor(Duration::from_secs(5)).execute(
            HttpMethod::Get,
            &url,
            &BTreeMap::new(),
            RequestPayload::Empty,
        )
    })
    .await;

    assert_eq!(result.error_kind(), Some(RequestErrorKind::Http));
}

#[tokio::test]
async fn given_missing_attachment_when_executed_then_unknown_error_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let url = Url::parse(&server.uri()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("ghost.obj");

    let result = blocking(move || {
        executor(Duration::from_secs(5)).execute(
            HttpMethod::Post,
            &url,
            &BTreeMap::new(),
            RequestPayload::Multipart {
                fields: Vec::new(),
                files: vec![Attachment::new("model", missing)],
            },
        )
    })
    .await;

    assert_eq!(result.error_kind(), Some(RequestErrorKind::Unknown));
    assert!(result.error_message().unwrap().contains("ghost.obj"));
}

/// **VALUE**: An executor built from the loaded config sends the configured user agent.
///
/// **WHY THIS MATTERS**: Some asset servers route or rate-limit by user agent; the value
/// in `exporter.toml` has to reach the wire.
///
/// **BUG THIS CATCHES**: Would catch `from_config` ignoring `user_agent` and falling back
/// to the built-in default.
#[tokio::test]
async fn given_config_user_agent_when_executor_built_from_config_then_header_is_sent() {
    // GIVEN: A server that only answers the configured user agent
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("user-agent", "studio-pipeline/2.1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/health", server.uri())).unwrap();

    let config = ExporterConfig::from_toml_str("user_agent = \"studio-pipeline/2.1\"").unwrap();

    // WHEN: Executing through an executor built from that config
    let result = blocking(move || {
        RequestExecutor::from_config(&config)
            .unwrap()
            .execute(
                HttpMethod::Get,
                &url,
                &BTreeMap::new(),
                RequestPayload::Empty,
            )
    })
    .await;

    // THEN: The mock matched on the header
    assert_eq!(result.status_label().as_deref(), Some("[200]"));
}

/// **VALUE**: `timeout_secs` from the config bounds each request.
///
/// **BUG THIS CATCHES**: Would catch `from_config` building with the 100 second default,
/// which would leave this request hanging for the full server delay.
#[tokio::test]
async fn given_config_timeout_when_server_is_slower_then_timeout_error() {
    // GIVEN: A one second timeout and a server that takes five
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/slow", server.uri())).unwrap();

    let config = ExporterConfig::from_toml_str("timeout_secs = 1").unwrap();

    // WHEN: Executing through an executor built from that config
    let (configured, result) = blocking(move || {
        let executor = RequestExecutor::from_config(&config).unwrap();
        let result = executor.execute(
            HttpMethod::Get,
            &url,
            &BTreeMap::new(),
            RequestPayload::Empty,
        );
        (executor.timeout(), result)
    })
    .await;

    // THEN: The configured timeout applied
    assert_eq!(configured, Duration::from_secs(1));
    assert_eq!(result.error_kind(), Some(RequestErrorKind::Timeout));
}

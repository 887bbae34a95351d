use crate::helpers::{TEST_TOKEN, blocking, context_for, executor, refused_url};

use exporter_core::messages::INVALID_HOST_MESSAGE;
use exporter_core::{RequestErrorKind, check_connection, do_request};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Unsupported methods never reach the network.
///
/// **WHY THIS MATTERS**: The method comes straight from a text field. Anything outside
/// GET/POST/PUT/DELETE must be stopped with a readable log line, not sent.
///
/// **BUG THIS CATCHES**: Would catch validation moving after dispatch, or a lenient
/// method parser.
#[tokio::test]
async fn given_unsupported_method_when_dispatched_then_no_request_and_one_log_line() {
    // GIVEN: A server that must not be called
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let uri = server.uri();

    for verb in ["PATCH", "get", "", "HEAD"] {
        let uri = uri.clone();
        let verb = verb.to_string();

        // WHEN: Dispatching with an unsupported method
        let context = blocking(move || {
            let mut context = context_for(&uri);
            context.request.method = verb;
            context.request.endpoint = "/items".to_string();
            do_request(&executor(Duration::from_secs(5)), &mut context);
            context
        })
        .await;

        // THEN: One validation line, request fields reset
        assert_eq!(context.log.len(), 1);
        assert!(
            context
                .log
                .latest()
                .unwrap()
                .starts_with("Error: Request method is invalid: ")
        );
        let response = context.response.as_ref().unwrap();
        assert_eq!(response.error_kind(), Some(RequestErrorKind::Validation));
        assert!(context.request.is_blank());
    }
}

#[tokio::test]
async fn given_host_without_scheme_when_dispatched_then_rejected_before_io() {
    let context = blocking(|| {
        let mut context = context_for("api.example.com");
        context.request.method = "GET".to_string();
        do_request(&executor(Duration::from_secs(5)), &mut context);
        context
    })
    .await;

    assert_eq!(context.log.chronological(), vec![INVALID_HOST_MESSAGE]);
    assert!(!context.response.as_ref().unwrap().successful());
    assert!(context.request.is_blank());
}

/// **VALUE**: A successful call logs status, headers and body in that order, sends the
/// bearer token, and clears the request.
#[tokio::test]
async fn given_valid_request_when_dispatched_then_logged_and_reset() {
    // GIVEN: A server expecting the bearer token and the JSON body
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/models/7"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({"name": "tower"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "r-1")
                .set_body_string("updated"),
        )
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();

    // WHEN: Dispatching a PUT composed like the panel does
    let (context, result) = blocking(move || {
        let mut context = context_for(&uri);
        context.request.method = "PUT".to_string();
        context.request.endpoint = "/models/7".to_string();
        context
            .request
            .set_headers_json(r#"{"Accept": "application/json"}"#)
            .unwrap();
        context.request.set_body_json(r#"{"name": "tower"}"#).unwrap();
        let result = do_request(&executor(Duration::from_secs(5)), &mut context);
        (context, result)
    })
    .await;

    // THEN: Three lines, oldest first: status, headers, body
    assert!(result.successful());
    let lines = context.log.chronological();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Status: [200]");
    assert!(lines[1].starts_with("Headers: {"));
    assert!(lines[1].contains("\"x-request-id\":\"r-1\""));
    assert_eq!(lines[2], "Body: updated");

    // AND: The request was reset and the response stored
    assert!(context.request.is_blank());
    assert_eq!(
        context.response.as_ref().unwrap().status_label().as_deref(),
        Some("[200]")
    );
}

#[tokio::test]
async fn given_unreachable_server_when_dispatched_then_connection_line_and_reset() {
    let host = refused_url();

    let context = blocking(move || {
        let mut context = context_for(&host);
        context.request.method = "DELETE".to_string();
        context.request.endpoint = "/models/7".to_string();
        do_request(&executor(Duration::from_secs(5)), &mut context);
        context
    })
    .await;

    assert_eq!(context.log.len(), 1);
    assert!(context.log.latest().unwrap().starts_with("Connection Error: "));
    assert_eq!(
        context.response.as_ref().unwrap().error_kind(),
        Some(RequestErrorKind::Connection)
    );
    assert!(context.request.is_blank());
}

#[tokio::test]
async fn given_stale_request_when_connection_checked_then_plain_get_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let uri = server.uri();

    let context = blocking(move || {
        let mut context = context_for(&uri);
        context.server.endpoint = "/health".to_string();
        context.request.method = "POST".to_string();
        context.request.body = Some(json!({"stale": true}));
        check_connection(&executor(Duration::from_secs(5)), &mut context);
        context
    })
    .await;

    assert_eq!(context.log.chronological()[0], "Status: [204]");
    assert!(context.request.is_blank());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

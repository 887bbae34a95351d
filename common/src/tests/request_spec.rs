use crate::{HttpMethod, RequestSpec, ServerConfig};

use serde_json::json;

#[test]
fn given_header_json_when_set_then_headers_are_parsed() {
    let mut spec = RequestSpec::new("GET");

    spec.set_headers_json(r#"{"Accept": "application/json", "X-Trace": "1"}"#)
        .unwrap();

    assert_eq!(spec.headers.len(), 2);
    assert_eq!(spec.headers["Accept"], "application/json");
}

#[test]
fn given_blank_text_when_set_then_headers_and_body_are_empty() {
    let mut spec = RequestSpec::new("POST");
    spec.set_body_json(r#"{"a": 1}"#).unwrap();

    spec.set_headers_json("  ").unwrap();
    spec.set_body_json("").unwrap();

    assert!(spec.headers.is_empty());
    assert!(spec.body.is_none());
}

#[test]
fn given_malformed_json_when_set_then_error_is_returned() {
    let mut spec = RequestSpec::new("POST");

    assert!(spec.set_headers_json("{not json").is_err());
    assert!(spec.set_body_json("[1, 2").is_err());
}

/// **VALUE**: `reset()` clears every transient field.
///
/// **WHY THIS MATTERS**: Dispatch resets the request after each call so a second click does
/// not resend stale data. Missing a field here means a leftover body or endpoint.
#[test]
fn given_populated_spec_when_reset_then_blank() {
    let mut spec = RequestSpec::new("PUT");
    spec.endpoint = "/models/1".to_string();
    spec.headers.insert("X-Test".into(), "yes".into());
    spec.body = Some(json!({"name": "tower"}));

    spec.reset();

    assert!(spec.is_blank());
    assert_eq!(spec, RequestSpec::default());
}

#[test]
fn given_method_string_when_parsed_then_uses_exact_match() {
    assert_eq!(RequestSpec::new("DELETE").parsed_method().unwrap(), HttpMethod::Delete);
    assert!(RequestSpec::new("delete").parsed_method().is_err());
}

#[test]
fn given_hosts_when_scheme_checked_then_only_http_and_https_pass() {
    assert!(ServerConfig::new("https://api.example.com", "").has_valid_scheme());
    assert!(ServerConfig::new("http://localhost:8080", "").has_valid_scheme());
    assert!(!ServerConfig::new("ftp://example.com", "").has_valid_scheme());
    assert!(!ServerConfig::new("example.com", "").has_valid_scheme());
    assert!(!ServerConfig::new("", "").has_valid_scheme());
}

#[test]
fn given_host_and_endpoint_when_target_built_then_joined_verbatim() {
    let server = ServerConfig::new("https://api.example.com", "/3d-objects");

    assert_eq!(server.target(), "https://api.example.com/3d-objects");
}

#[test]
fn given_request_endpoint_when_target_built_then_it_overrides_server_endpoint() {
    let server = ServerConfig::new("http://localhost:8080", "/default");

    assert_eq!(server.target_with("/override"), "http://localhost:8080/override");
    assert_eq!(server.target_with(""), "http://localhost:8080/default");
}

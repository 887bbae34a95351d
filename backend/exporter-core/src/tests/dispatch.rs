use crate::dispatch::{AUTHORIZATION_HEADER, authorized_headers, target_url};
use crate::error::request::RequestErrorKind;
use crate::messages::INVALID_HOST_MESSAGE;

use common::{Credentials, ServerConfig};

use std::collections::BTreeMap;

/// **VALUE**: The bearer token replaces any user-typed Authorization header.
///
/// **BUG THIS CATCHES**: Would catch sending two Authorization headers (`authorization`
/// from the headers field and `Authorization` from credentials), which servers resolve
/// unpredictably.
#[test]
fn given_token_and_user_auth_header_when_merged_then_single_bearer_header() {
    let mut headers = BTreeMap::new();
    headers.insert("authorization".to_string(), "Basic xyz".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    let credentials = Credentials::new("artist", "a@example.com", "tok");

    let merged = authorized_headers(&headers, &credentials);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[AUTHORIZATION_HEADER], "Bearer tok");
    assert_eq!(merged["Accept"], "application/json");
}

#[test]
fn given_no_token_when_merged_then_headers_unchanged() {
    let mut headers = BTreeMap::new();
    headers.insert("X-Api-Key".to_string(), "k".to_string());

    let merged = authorized_headers(&headers, &Credentials::default());

    assert_eq!(merged, headers);
}

#[test]
fn given_host_without_scheme_when_target_built_then_validation_error() {
    let server = ServerConfig::new("api.example.com", "/models");

    let err = target_url(&server, "").unwrap_err();

    assert_eq!(err.kind(), RequestErrorKind::Validation);
    assert_eq!(err.log_line(), INVALID_HOST_MESSAGE);
}

#[test]
fn given_unparsable_target_when_built_then_validation_error() {
    let server = ServerConfig::new("http://", "");

    let err = target_url(&server, "").unwrap_err();

    assert_eq!(err.kind(), RequestErrorKind::Validation);
    assert!(err.log_line().starts_with("Error: request url is invalid: "));
}

#[test]
fn given_valid_host_when_target_built_then_endpoint_appended() {
    let server = ServerConfig::new("https://api.example.com", "/3dobjects");

    let url = target_url(&server, "").unwrap();

    assert_eq!(url.as_str(), "https://api.example.com/3dobjects");
}

use crate::{BearerToken, Credentials};

/// **VALUE**: Verifies that tokens never leak through Debug or Display.
///
/// **WHY THIS MATTERS**: Contexts holding credentials get logged with `{:?}` while debugging
/// failed uploads. A leaked token ends up in the log file on disk.
///
/// **BUG THIS CATCHES**: Would catch if someone replaces the manual Debug impl with a derive.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    // GIVEN: A token with a recognisable value
    let token = BearerToken::new("super-secret-value");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither contains the secret
    assert!(!debug.contains("super-secret-value"));
    assert!(!display.contains("super-secret-value"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_token_with_pasted_prefix_when_created_then_prefix_is_stripped() {
    let token = BearerToken::new("  Bearer abc123  ");

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(token.header_value().as_deref(), Some("Bearer abc123"));
}

/// **VALUE**: An empty token produces no Authorization header.
///
/// **BUG THIS CATCHES**: Would catch sending `Authorization: Bearer ` with nothing after it,
/// which some servers reject with 400 instead of treating the call as anonymous.
#[test]
fn given_empty_token_when_header_requested_then_none() {
    let credentials = Credentials::new("artist", "artist@example.com", "   ");

    assert!(credentials.authorization_token.is_empty());
    assert_eq!(credentials.authorization_header(), None);
}

#[test]
fn given_token_when_serialized_then_fails() {
    let token = BearerToken::new("abc123");

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Tokens must not be serializable");
}

use crate::error::request::{RequestError, RequestErrorKind, describe_chain};
use crate::messages::{INVALID_HOST_MESSAGE, UNKNOWN_ERROR_MESSAGE};

use common::ErrorLocation;

use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;

#[test]
fn given_validation_error_when_logged_then_message_is_used_verbatim() {
    let err = RequestError::validation(INVALID_HOST_MESSAGE);

    assert_eq!(err.kind(), RequestErrorKind::Validation);
    assert_eq!(err.log_line(), INVALID_HOST_MESSAGE);
}

/// **VALUE**: Each transport kind gets its own log prefix.
///
/// **WHY THIS MATTERS**: The prefix is the only thing in the log panel telling the artist
/// whether to check the host (connection), the network (timeout) or the server (http).
#[test]
fn given_transport_errors_when_logged_then_prefixed_by_kind() {
    let location = ErrorLocation::from(Location::caller());
    let cases = [
        (
            RequestError::Http {
                message: "bad frame".into(),
                location,
            },
            "Http Error: bad frame",
            "HttpError",
        ),
        (
            RequestError::Connection {
                message: "refused".into(),
                location,
            },
            "Connection Error: refused",
            "ConnectionError",
        ),
        (
            RequestError::Timeout {
                message: "slow".into(),
                location,
            },
            "Timeout Error: slow",
            "TimeoutError",
        ),
    ];

    for (err, line, kind) in cases {
        assert_eq!(err.log_line(), line);
        assert_eq!(err.kind().to_string(), kind);
        assert_eq!(err.location(), location);
    }

    let unknown = RequestError::unknown("odd");
    assert_eq!(unknown.log_line(), format!("{UNKNOWN_ERROR_MESSAGE}odd"));
}

#[test]
fn given_error_when_displayed_then_includes_location() {
    let err = RequestError::unknown("attachment missing");

    let text = err.to_string();

    assert!(text.contains("Unknown Error: attachment missing"));
    assert!(text.contains("request_error.rs"));
}

#[derive(Debug)]
struct Wrapped(IoError);

impl std::fmt::Display for Wrapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error sending request")
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn given_nested_error_when_described_then_chain_is_joined() {
    let err = Wrapped(IoError::new(ErrorKind::ConnectionRefused, "connection refused"));

    let text = describe_chain(&err);

    assert_eq!(text, "error sending request: connection refused");
}

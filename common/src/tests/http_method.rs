use crate::HttpMethod;

use std::str::FromStr;

#[test]
fn given_supported_verbs_when_parsed_then_round_trip_through_display() {
    for method in HttpMethod::ALL {
        let parsed = HttpMethod::from_str(method.as_str()).unwrap();
        assert_eq!(parsed, method);
        assert_eq!(parsed.to_string(), method.as_str());
    }
}

/// **VALUE**: Only the four upper-case verbs are accepted.
///
/// **WHY THIS MATTERS**: The dispatch path rejects anything the parser refuses before any
/// network I/O. A permissive parser would let `PATCH` or `get` through to the server.
///
/// **BUG THIS CATCHES**: Would catch case-insensitive matching or an added verb.
#[test]
fn given_unsupported_strings_when_parsed_then_error_keeps_input() {
    for input in ["", "get", "PATCH", "HEAD", "OPTIONS", " GET"] {
        let err = HttpMethod::from_str(input).unwrap_err();
        assert_eq!(err.method(), input);
        assert!(err.to_string().contains("Unsupported Method Error"));
    }
}

#[test]
fn given_methods_when_checking_body_then_only_post_and_put_carry_one() {
    assert!(HttpMethod::Post.carries_body());
    assert!(HttpMethod::Put.carries_body());
    assert!(!HttpMethod::Get.carries_body());
    assert!(!HttpMethod::Delete.carries_body());
}

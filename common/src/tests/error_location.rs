use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an ErrorLocation. If capture
/// breaks, the log panel and the log file lose the only pointer to where a request failed.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated or the
/// file path is no longer recorded.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: Current caller location
    let expected_line = line!() + 3;

    // WHEN: Creating ErrorLocation from caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the Display format is `[file:line:column]`.
///
/// **BUG THIS CATCHES**: Would catch if brackets or separators change and error strings
/// become inconsistent across crates.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation::from(Location::caller());

    let formatted = format!("{}", location);

    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(formatted.contains(&location.line.to_string()));
    assert_eq!(
        formatted.matches(':').count(),
        2,
        "Should have exactly 2 colons"
    );
}

#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let loc1 = capture_location();
    let loc2 = capture_location();

    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}

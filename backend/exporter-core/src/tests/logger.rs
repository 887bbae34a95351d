// Unit tests for logger initialization
// Runs as one test: the installed logger is process-wide state

use crate::logger::{LOG_FILE_NAME, initialize};

use std::path::PathBuf;

/// **VALUE**: A bad directory fails cleanly, a good one installs the logger, and a
/// second call is a no-op.
///
/// **WHY THIS MATTERS**: The host calls `initialize` on every add-on registration. A
/// panic there takes Blender down with it; a second install attempt would panic inside
/// `log::set_boxed_logger` without the guard.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` errors are unwrapped, or if
/// the installed flag is removed.
#[test]
fn given_logger_when_initialized_repeatedly_then_only_first_valid_call_installs() {
    // GIVEN: An unwritable directory and a temporary one
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Initializing with the invalid directory first
    let failed = initialize(&invalid_dir);

    // THEN: Returns an error instead of panicking
    let err = failed.unwrap_err();
    assert!(format!("{err:?}").contains("Logger"));

    // WHEN: Initializing twice with a valid directory
    let first = initialize(temp_dir.path());
    let second = initialize(temp_dir.path());

    // THEN: Both succeed and the log file exists
    assert!(first.is_ok(), "First valid initialization should succeed");
    assert!(second.is_ok(), "Second initialization should be idempotent");
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

use crate::ActivityLog;

#[test]
fn given_lines_when_pushed_then_newest_is_first() {
    let mut log = ActivityLog::new();

    log.push("first");
    log.push("second");
    log.push("third");

    assert_eq!(log.iter().collect::<Vec<_>>(), vec!["third", "second", "first"]);
    assert_eq!(log.chronological(), vec!["first", "second", "third"]);
    assert_eq!(log.latest(), Some("third"));
}

#[test]
fn given_populated_log_when_cleared_then_empty() {
    let mut log = ActivityLog::new();
    log.push("Status: [200]");

    log.clear();

    assert!(log.is_empty());
    assert_eq!(log.latest(), None);
}

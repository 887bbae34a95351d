//! Contents of the add-on's log panel.

use std::collections::VecDeque;

/// Append-only list of log lines, newest first.
///
/// Unbounded; the host decides how many rows it shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line at the top of the panel.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Lines newest first, the order the panel draws them.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Lines in the order they were written.
    pub fn chronological(&self) -> Vec<&str> {
        self.entries.iter().rev().map(String::as_str).collect()
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Shared message log primitives for the terminal and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages produced from session events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// Something the operator should notice, e.g. a game being won.
    Highlight,
    Warning,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Session sequence number of the dispatch that produced the entry.
    pub sequence: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, sequence: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            sequence,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the operator.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Warning));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_entry_when_full() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut log = MessageLog::new(0);
        assert_eq!(log.capacity(), 1);

        log.push_text("kept");
        log.push_warning("replaces");

        let entry = log.recent(5).next().expect("one entry");
        assert_eq!(entry.text, "replaces");
        assert_eq!(entry.level, MessageLevel::Warning);
    }

    #[test]
    fn recent_yields_newest_first() {
        let mut log = MessageLog::new(8);
        for text in ["a", "b", "c"] {
            log.push_text(text);
        }

        let texts: Vec<_> = log.recent(2).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }
}

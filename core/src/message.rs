//! The message log that records the outcome of every hero operation.

use std::sync::{Arc, Mutex, PoisonError};

/// Append-only, fire-and-forget sink for human-readable messages.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn add(&self, message: String) {
        (**self).add(message)
    }
}

/// In-memory message log. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl MessageSink for MessageService {
    fn add(&self, message: String) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_insertion_order() {
        let log = MessageService::new();
        log.add("first".to_string());
        log.add("second".to_string());
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clones_share_the_log() {
        let log = MessageService::new();
        let other = log.clone();
        other.add("from clone".to_string());
        assert_eq!(log.messages(), vec!["from clone"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let log = MessageService::new();
        log.add("gone".to_string());
        log.clear();
        assert!(log.messages().is_empty());
    }
}

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Append-only log of status lines shown to the user.
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    /// Snapshot of every message so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic mid-push cannot leave the Vec half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let sink = MessageService::new();
        sink.add("one");
        sink.add("two");
        sink.add("one");

        assert_eq!(sink.messages(), vec!["one", "two", "one"]);
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn starts_empty() {
        let sink = MessageService::new();
        assert!(sink.is_empty());
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn concurrent_appends_are_all_kept() {
        let sink = Arc::new(MessageService::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let sink = Arc::clone(&sink);
            handles.push(tokio::spawn(async move { sink.add(format!("msg {i}")) }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(sink.len(), 16);
    }
}

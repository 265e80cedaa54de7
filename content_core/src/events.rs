use std::sync::Arc;

use async_trait::async_trait;

/// Notified after a row of type `M` has been permanently removed.
///
/// The row is already gone when a listener runs; listeners react to the
/// removal (file cleanup and the like) and must not try to re-persist it.
#[async_trait]
pub trait DeletionListener<M>: Send + Sync {
    async fn on_deleted(&self, record: &M);
}

/// Typed "delete committed" notification channel for one entity type.
///
/// Listeners subscribe once during initialization; notification happens
/// synchronously in the deleting call, at most once per successfully
/// deleted record.
pub struct DeletionEvents<M> {
    listeners: Vec<Arc<dyn DeletionListener<M>>>,
}

impl<M> DeletionEvents<M> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Arc<dyn DeletionListener<M>>) {
        self.listeners.push(listener);
    }

    pub async fn notify(&self, record: &M) {
        for listener in &self.listeners {
            listener.on_deleted(record).await;
        }
    }
}

impl<M> Default for DeletionEvents<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter(AtomicUsize);

    #[async_trait]
    impl DeletionListener<String> for Counter {
        async fn on_deleted(&self, _record: &String) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_notify_reaches_every_listener_once() {
        let mut events = DeletionEvents::new();
        let first = Arc::new(Counter(AtomicUsize::new(0)));
        let second = Arc::new(Counter(AtomicUsize::new(0)));
        events.subscribe(first.clone());
        events.subscribe(second.clone());

        events.notify(&"gone".to_string()).await;

        assert_eq!(first.0.load(Ordering::SeqCst), 1);
        assert_eq!(second.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_notify_without_listeners_is_a_no_op() {
        let events: DeletionEvents<String> = DeletionEvents::new();
        events.notify(&"gone".to_string()).await;
    }
}

//! Callback-backed notifier.

use super::service::{ChangeNotifier, NotifyResult};
use async_trait::async_trait;

/// Adapts a zero-argument callback to [`ChangeNotifier`].
///
/// ```ignore
/// let reloads = Arc::new(AtomicUsize::new(0));
/// let counter = reloads.clone();
/// let notifier = FnNotifier::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
/// ```
pub struct FnNotifier {
    callback: Box<dyn Fn() + Send + Sync>,
}

impl FnNotifier {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }
}

#[async_trait]
impl ChangeNotifier for FnNotifier {
    async fn mappings_changed(&self) -> NotifyResult<()> {
        (self.callback)();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_invokes_callback_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let notifier = FnNotifier::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.mappings_changed().await.unwrap();
        notifier.mappings_changed().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

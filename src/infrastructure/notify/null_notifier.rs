//! No-op notifier.

use super::service::{ChangeNotifier, NotifyResult};
use async_trait::async_trait;
use tracing::debug;

/// A notifier that does nothing.
///
/// Used when no observer is configured, or as the fallback when Redis is
/// unreachable at startup.
pub struct NullNotifier;

impl NullNotifier {
    /// Creates a new NullNotifier instance.
    pub fn new() -> Self {
        debug!("Using NullNotifier (change notifications disabled)");
        Self
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChangeNotifier for NullNotifier {
    async fn mappings_changed(&self) -> NotifyResult<()> {
        Ok(())
    }
}

//! Change notifier trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur while signalling a change.
#[derive(Debug)]
pub enum NotifyError {
    ConnectionError(String),
    PublishError(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Notifier connection error: {}", e),
            Self::PublishError(e) => write!(f, "Notifier publish error: {}", e),
        }
    }
}

impl std::error::Error for NotifyError {}

/// Result type for notifier operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Signals "mappings changed" to external observers, such as a routing layer
/// that has to reload its table.
///
/// Notification is best-effort: callers log failures and never undo the
/// mutation that triggered it.
///
/// # Implementations
///
/// - [`crate::infrastructure::notify::RedisNotifier`] - Redis pub/sub
/// - [`crate::infrastructure::notify::FnNotifier`] - Wraps a plain callback
/// - [`crate::infrastructure::notify::NullNotifier`] - Does nothing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Called once after each mapping mutation has been persisted and indexed.
    async fn mappings_changed(&self) -> NotifyResult<()>;
}

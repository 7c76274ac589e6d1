//! Change notification layer.
//!
//! Provides a [`ChangeNotifier`] trait with three implementations:
//! - [`RedisNotifier`] - Publishes on a Redis pub/sub channel
//! - [`FnNotifier`] - Invokes an injected callback
//! - [`NullNotifier`] - No-op for disabled notifications

mod fn_notifier;
mod null_notifier;
mod redis_notifier;
mod service;

pub use fn_notifier::FnNotifier;
pub use null_notifier::NullNotifier;
pub use redis_notifier::RedisNotifier;
pub use service::{ChangeNotifier, NotifyError, NotifyResult};

#[cfg(test)]
pub use service::MockChangeNotifier;

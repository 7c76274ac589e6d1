//! Redis pub/sub notifier.

use super::service::{ChangeNotifier, NotifyError, NotifyResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::Serialize;
use tracing::{debug, info};

/// Message published on every change.
#[derive(Debug, Serialize)]
struct ChangeMessage {
    event: &'static str,
    at: DateTime<Utc>,
}

/// Publishes change notifications on a Redis channel.
///
/// Subscribers receive a JSON message such as
/// `{"event":"mappings_changed","at":"2024-01-01T00:00:00Z"}` and reload
/// their view of the mappings.
pub struct RedisNotifier {
    client: ConnectionManager,
    channel: String,
}

impl RedisNotifier {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, channel: impl Into<String>) -> NotifyResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            NotifyError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            NotifyError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| NotifyError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            channel: channel.into(),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

#[async_trait]
impl ChangeNotifier for RedisNotifier {
    async fn mappings_changed(&self) -> NotifyResult<()> {
        let message = ChangeMessage {
            event: "mappings_changed",
            at: Utc::now(),
        };
        let payload = serde_json::to_string(&message)
            .map_err(|e| NotifyError::PublishError(e.to_string()))?;

        let mut conn = self.client.clone();
        let receivers: i64 = redis::cmd("PUBLISH")
            .arg(&self.channel)
            .arg(payload)
            .query_async(&mut conn)
            .await
            .map_err(|e| NotifyError::PublishError(e.to_string()))?;

        debug!("Published change on {} to {} subscribers", self.channel, receivers);
        Ok(())
    }
}

//! Wiring of the production mapper.
//!
//! Handles the database pool, migrations and notifier selection.

use crate::application::services::{MapperOptions, UrlMapper};
use crate::config::Config;
use crate::infrastructure::notify::{ChangeNotifier, NullNotifier, RedisNotifier};
use crate::infrastructure::persistence::PgMappingRepository;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Connects to the configured stores and returns a loaded mapper.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis notifier (or NullNotifier fallback)
/// - The mapper's index
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Existing mappings cannot be loaded
pub async fn connect(config: &Config) -> Result<UrlMapper<PgMappingRepository>> {
    config.print_summary();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let notifier = build_notifier(config).await;
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let options = MapperOptions {
        notify_on_remove: config.notify_on_remove,
    };

    let mapper = UrlMapper::load_with_options(repository, notifier, options)
        .await
        .context("Failed to load url mappings")?;

    Ok(mapper)
}

/// Picks the change notifier for `config`.
///
/// Falls back to [`NullNotifier`] when Redis is not configured or unreachable.
pub async fn build_notifier(config: &Config) -> Arc<dyn ChangeNotifier> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Change notifications disabled (NullNotifier)");
        return Arc::new(NullNotifier::new());
    };

    match RedisNotifier::connect(redis_url, config.notify_channel.clone()).await {
        Ok(redis) => {
            tracing::info!("Change notifications enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullNotifier.", e);
            Arc::new(NullNotifier::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_NOTIFY_CHANNEL;

    fn config_with_redis(redis_url: Option<&str>) -> Config {
        Config {
            database_url: "postgres://localhost/test".to_string(),
            redis_url: redis_url.map(str::to_string),
            notify_channel: DEFAULT_NOTIFY_CHANNEL.to_string(),
            notify_on_remove: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 1,
            db_connect_timeout: 1,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
        }
    }

    #[tokio::test]
    async fn test_build_notifier_without_redis() {
        let notifier = build_notifier(&config_with_redis(None)).await;

        assert!(notifier.mappings_changed().await.is_ok());
    }

    #[tokio::test]
    async fn test_build_notifier_falls_back_when_redis_unreachable() {
        let notifier = build_notifier(&config_with_redis(Some("redis://127.0.0.1:1/0"))).await;

        // A Redis-backed notifier would fail to publish here.
        assert!(notifier.mappings_changed().await.is_ok());
    }
}

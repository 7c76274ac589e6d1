//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL mappings.
///
/// Backed by the `url_mappings` table, where `url` is the primary key and
/// `new_url` carries a secondary index.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    url: String,
    new_url: String,
    is_local: bool,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.url, row.new_url, row.is_local)
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn list(&self) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT url, new_url, is_local
            FROM url_mappings
            ORDER BY created_at, url
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT url, new_url, is_local
            FROM url_mappings
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn insert(&self, mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (url, new_url, is_local)
            VALUES ($1, $2, $3)
            RETURNING url, new_url, is_local
            "#,
        )
        .bind(mapping.url)
        .bind(mapping.new_url)
        .bind(mapping.is_local)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn remove_by_url(&self, url: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM url_mappings WHERE url = $1")
            .bind(url)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

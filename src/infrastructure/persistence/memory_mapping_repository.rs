//! In-process mapping store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Document-store style repository kept in process memory.
///
/// Records are kept in insertion order and, like a schemaless document store,
/// duplicate `url` keys are accepted. Useful for embedding and for tests that
/// should not need a database.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    records: RwLock<Vec<UrlMapping>>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(records: Vec<UrlMapping>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn list(&self) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|m| m.url == url).cloned())
    }

    async fn insert(&self, mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mapping = UrlMapping::from(mapping);
        self.records.write().await.push(mapping.clone());
        Ok(mapping)
    }

    async fn remove_by_url(&self, url: &str) -> Result<u64, AppError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|m| m.url != url);
        Ok((before - records.len()) as u64)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.read().await.len() as i64)
    }
}

//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence interface for URL mappings.
///
/// The store is not required to enforce uniqueness of `url`; callers that need
/// one record per key remove before inserting.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns every persisted mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn list(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Finds a mapping by its exact original URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the store enforces uniqueness and the
    /// `url` is already present.
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn insert(&self, mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Deletes every mapping keyed by `url`.
    ///
    /// Returns the number of deleted records; `Ok(0)` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn remove_by_url(&self, url: &str) -> Result<u64, AppError>;

    /// Counts persisted mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}

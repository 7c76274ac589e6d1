//! URL mapping service.

use std::collections::HashMap;
use std::sync::Arc;

use metrics::{counter, gauge};
use serde_json::json;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::infrastructure::notify::ChangeNotifier;
use crate::utils::url_normalizer::normalize_new_url;

/// Behaviour switches for [`UrlMapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperOptions {
    /// Fire the change notifier after a removal that deleted at least one mapping.
    pub notify_on_remove: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            notify_on_remove: true,
        }
    }
}

/// Maintains the normalized, de-duplicated set of URL mappings.
///
/// Lookups and counts are answered from an in-memory index keyed by `url`,
/// built from the repository when the mapper is loaded. Every mutation goes to
/// the repository first and is mirrored into the index only once the store
/// has accepted it, so index and store agree after each successful call.
///
/// The mapper is a single-owner component: mutations take `&mut self`.
pub struct UrlMapper<R: MappingRepository> {
    repository: Arc<R>,
    notifier: Arc<dyn ChangeNotifier>,
    options: MapperOptions,
    index: HashMap<String, UrlMapping>,
}

impl<R: MappingRepository> UrlMapper<R> {
    /// Creates a mapper with default options and builds its index from `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the mappings cannot be listed.
    pub async fn load(
        repository: Arc<R>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Result<Self, AppError> {
        Self::load_with_options(repository, notifier, MapperOptions::default()).await
    }

    /// Creates a mapper with explicit options and builds its index from `repository`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the mappings cannot be listed.
    pub async fn load_with_options(
        repository: Arc<R>,
        notifier: Arc<dyn ChangeNotifier>,
        options: MapperOptions,
    ) -> Result<Self, AppError> {
        let mut mapper = Self {
            repository,
            notifier,
            options,
            index: HashMap::new(),
        };
        mapper.reload().await?;
        Ok(mapper)
    }

    /// Rebuilds the index from the repository.
    ///
    /// If the store holds several records for the same `url`, the last one
    /// listed wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the mappings cannot be listed. The
    /// current index is left untouched in that case.
    pub async fn reload(&mut self) -> Result<(), AppError> {
        let mappings = self.repository.list().await?;

        self.index = mappings
            .into_iter()
            .map(|mapping| (mapping.url.clone(), mapping))
            .collect();
        self.record_size();

        info!("Loaded {} url mappings", self.index.len());
        Ok(())
    }

    /// Maps `url` to `new_url`, replacing any previous mapping for `url`.
    ///
    /// Non-local destinations without a path get a trailing slash; local
    /// destinations are stored as given. The previous record is removed from
    /// the store before the new one is inserted, then the change notifier runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `url` is empty
    /// - `new_url` is not local and cannot be parsed as an absolute URL
    ///
    /// Returns [`AppError::Persistence`] or [`AppError::Conflict`] when the store
    /// fails. If the insert fails after the old record was removed, the mapping
    /// is absent until the caller retries.
    pub async fn set(&mut self, url: &str, new_url: &str, is_local: bool) -> Result<(), AppError> {
        let normalized = normalize_new_url(new_url, is_local).map_err(|e| {
            AppError::validation(
                "Invalid new URL",
                json!({ "new_url": new_url, "reason": e.to_string() }),
            )
        })?;

        let new_mapping = NewUrlMapping {
            url: url.to_string(),
            new_url: normalized,
            is_local,
        };
        new_mapping.validate().map_err(|e| {
            AppError::validation("Invalid URL mapping", json!({ "reason": e.to_string() }))
        })?;

        self.repository.remove_by_url(url).await?;
        self.index.remove(url);

        let created = self.repository.insert(new_mapping).await?;
        info!(
            url = %created.url,
            new_url = %created.new_url,
            is_local = created.is_local,
            "Mapping set"
        );
        self.index.insert(created.url.clone(), created);

        counter!("url_mapper_set_total").increment(1);
        self.record_size();
        self.notify().await;

        Ok(())
    }

    /// Returns the mapping for `url`, if any. Exact match only.
    pub fn get(&self, url: &str) -> Option<&UrlMapping> {
        let mapping = self.index.get(url);
        if mapping.is_none() {
            debug!("Mapping MISS: {}", url);
        }
        mapping
    }

    /// Whether a mapping exists for `url`.
    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    /// Removes the mapping keyed by `url`. Does nothing if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store fails; the index is
    /// left untouched in that case.
    pub async fn remove(&mut self, url: &str) -> Result<(), AppError> {
        let deleted = self.repository.remove_by_url(url).await?;
        let indexed = self.index.remove(url).is_some();

        if deleted == 0 && !indexed {
            debug!("No mapping to remove for {}", url);
            return Ok(());
        }

        info!(url = %url, "Mapping removed");
        counter!("url_mapper_removed_total").increment(1);
        self.after_removal().await;

        Ok(())
    }

    /// Removes every mapping whose stored `new_url` equals `new_url` exactly.
    ///
    /// The value is compared against the normalized form, so a mapping set
    /// with `http://foo.com` is removed with `http://foo.com/`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store fails. Mappings removed
    /// before the failure stay removed from both store and index.
    pub async fn remove_by_new_url(&mut self, new_url: &str) -> Result<(), AppError> {
        let urls: Vec<String> = self
            .index
            .values()
            .filter(|mapping| mapping.new_url == new_url)
            .map(|mapping| mapping.url.clone())
            .collect();

        if urls.is_empty() {
            debug!("No mapping to remove for new URL {}", new_url);
            return Ok(());
        }

        for url in &urls {
            self.repository.remove_by_url(url).await?;
            self.index.remove(url);
            counter!("url_mapper_removed_total").increment(1);
        }

        info!(new_url = %new_url, removed = urls.len(), "Mappings removed by new URL");
        self.after_removal().await;

        Ok(())
    }

    /// Number of mappings currently indexed.
    pub fn count(&self) -> usize {
        self.index.len()
    }

    /// Number of records the store itself reports.
    ///
    /// Equal to [`Self::count`] unless the store was changed behind the
    /// mapper's back or holds duplicate keys.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    pub async fn persisted_count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Iterates over the current mappings in no particular order.
    pub fn mappings(&self) -> impl Iterator<Item = &UrlMapping> {
        self.index.values()
    }

    /// Options this mapper was loaded with.
    pub fn options(&self) -> MapperOptions {
        self.options
    }

    async fn after_removal(&self) {
        self.record_size();
        if self.options.notify_on_remove {
            self.notify().await;
        }
    }

    async fn notify(&self) {
        if let Err(e) = self.notifier.mappings_changed().await {
            warn!("Change notification failed: {}", e);
        }
    }

    fn record_size(&self) {
        gauge!("url_mapper_mappings").set(self.index.len() as f64);
    }
}

//! # URL Mapper
//!
//! A persisted index of URL mappings: each original URL maps to a replacement
//! URL or a local path. Mappings are normalized at write time, looked up from
//! an in-memory index and mirrored into a pluggable store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and repository trait
//! - **Application Layer** ([`application`]) - The [`UrlMapper`] service
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL/in-memory stores and
//!   change notifiers
//!
//! ## Features
//!
//! - One mapping per original URL; re-setting replaces the previous mapping
//! - Trailing-slash normalization for bare-origin destinations
//! - Removal by original URL or by destination
//! - Change notifications over Redis pub/sub or a plain callback
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use url_mapper::prelude::*;
//!
//! # async fn example() -> Result<(), AppError> {
//! let repository = Arc::new(InMemoryMappingRepository::new());
//! let notifier = Arc::new(FnNotifier::new(|| println!("mappings changed")));
//! let mut mapper = UrlMapper::load(repository, notifier).await?;
//!
//! mapper.set("http://foo.com/bar/baz", "http://foo.com", false).await?;
//! assert_eq!(mapper.get("http://foo.com/bar/baz").unwrap().new_url, "http://foo.com/");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Production wiring is loaded from environment variables via [`config::Config`]
//! and assembled by [`bootstrap::connect`].

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use application::services::UrlMapper;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MapperOptions, UrlMapper};
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::notify::{ChangeNotifier, FnNotifier, NullNotifier};
    pub use crate::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
}

//! Domain layer containing the mapping entity and the persistence contract.
//!
//! The domain layer has no dependencies on infrastructure. Concrete stores
//! live in [`crate::infrastructure::persistence`], and the mapping logic that
//! ties store, index and notifications together lives in
//! [`crate::application::services`].
//!
//! - [`entities`] - The URL mapping record
//! - [`repositories`] - Persistence trait definitions

pub mod entities;
pub mod repositories;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete stores and change notification transports.
//!
//! # Modules
//!
//! - [`notify`] - Change notification (Redis, callback and no-op implementations)
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod notify;
pub mod persistence;

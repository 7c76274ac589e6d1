//! Application layer services implementing the mapping logic.
//!
//! This layer coordinates the repository, the in-memory index, normalization
//! and change notification behind a single API.
//!
//! # Available Services
//!
//! - [`services::url_mapper::UrlMapper`] - Mapping storage, lookup and removal

pub mod services;

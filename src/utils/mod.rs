//! Utility functions shared across layers.
//!
//! - [`url_normalizer`] - Write-time normalization of mapping destinations

pub mod url_normalizer;

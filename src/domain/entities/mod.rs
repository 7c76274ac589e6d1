//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewUrlMapping`] is validated and handed to the store, which answers with
//! the persisted [`UrlMapping`].

pub mod mapping;

pub use mapping::{NewUrlMapping, UrlMapping};

//! Business logic services for the application layer.

pub mod url_mapper;

pub use url_mapper::{MapperOptions, UrlMapper};

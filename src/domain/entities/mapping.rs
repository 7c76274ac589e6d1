//! URL mapping entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A mapping from an original URL to its replacement.
///
/// `url` is the unique key. `new_url` is stored normalized; when `is_local`
/// is set it is a local path and was stored exactly as given.
///
/// Serializes with the document field names `url`, `newUrl` and `isLocal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMapping {
    pub url: String,
    pub new_url: String,
    pub is_local: bool,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(url: impl Into<String>, new_url: impl Into<String>, is_local: bool) -> Self {
        Self {
            url: url.into(),
            new_url: new_url.into(),
            is_local,
        }
    }
}

/// Input data for persisting a mapping.
///
/// `new_url` must already be normalized by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUrlMapping {
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    pub new_url: String,

    pub is_local: bool,
}

impl From<NewUrlMapping> for UrlMapping {
    fn from(mapping: NewUrlMapping) -> Self {
        Self {
            url: mapping.url,
            new_url: mapping.new_url,
            is_local: mapping.is_local,
        }
    }
}

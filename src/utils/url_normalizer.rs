//! Write-time normalization of mapping destinations.
//!
//! Fully-qualified destinations that point at a bare origin (no path) get a
//! trailing slash so that `http://foo.com` and `http://foo.com/` are stored
//! the same way. Local paths are never touched.

use url::Url;

/// Errors that can occur during destination normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),
}

/// Normalizes a mapping destination before it is stored.
///
/// # Normalization Rules
///
/// 1. **Local paths** (`is_local == true`): returned unchanged, whatever their shape
/// 2. **Surrounding whitespace**: leading and trailing spaces and C0 control
///    characters are stripped, as URL parsing ignores them too
/// 3. **Trailing slash present**: returned unchanged (for special schemes a
///    trailing `\` counts as a slash)
/// 4. **Root-only path**: a `/` is inserted after the authority, ahead of any
///    query or fragment
/// 5. **Anything else**: returned unchanged (no re-serialization, so host case,
///    ports and fragments are kept as given)
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] when a non-local destination
/// cannot be parsed as an absolute URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_new_url("http://foo.com", false).unwrap(), "http://foo.com/");
/// assert_eq!(normalize_new_url("foo/bar", true).unwrap(), "foo/bar");
/// ```
pub fn normalize_new_url(new_url: &str, is_local: bool) -> Result<String, UrlNormalizationError> {
    if is_local {
        return Ok(new_url.to_string());
    }

    let new_url = new_url.trim_matches(|c: char| c <= ' ');
    let parsed =
        Url::parse(new_url).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if ends_with_separator(new_url, &parsed) || !has_empty_path(&parsed) {
        return Ok(new_url.to_string());
    }

    // The authority cannot contain an unescaped '?' or '#', so the first one
    // starts the query or fragment.
    let split = new_url.find(['?', '#']).unwrap_or(new_url.len());
    let (head, tail) = new_url.split_at(split);

    if ends_with_separator(head, &parsed) {
        return Ok(new_url.to_string());
    }

    Ok(format!("{head}/{tail}"))
}

fn ends_with_separator(raw: &str, url: &Url) -> bool {
    raw.ends_with('/') || (url.is_special() && raw.ends_with('\\'))
}

fn has_empty_path(url: &Url) -> bool {
    if url.cannot_be_a_base() {
        return false;
    }

    matches!(url.path(), "" | "/")
}

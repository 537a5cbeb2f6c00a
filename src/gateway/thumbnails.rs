//! Thumbnail path resolution.
//!
//! The backend writes thumbnails under the platform cache directory as
//! `Focular/thumbnails/<hash>.png`. Serialized hash representations can
//! carry separator characters (a byte-array hash renders with commas), so
//! those are stripped before the name is formed.

use crate::error::UiError;
use std::path::{Path, PathBuf};

/// Resolve the thumbnail path for `hash` under the platform cache directory.
pub fn resolve(hash: &str) -> Result<PathBuf, UiError> {
    let base = directories::BaseDirs::new()
        .ok_or_else(|| {
            UiError::Cache("Could not determine platform cache directory".to_string())
        })?
        .cache_dir()
        .to_path_buf();
    Ok(resolve_in(&base, hash))
}

/// Join the thumbnail path for `hash` under an explicit cache root.
pub fn resolve_in(cache_dir: &Path, hash: &str) -> PathBuf {
    cache_dir
        .join("Focular")
        .join("thumbnails")
        .join(format!("{}.png", sanitize_hash(hash)))
}

/// Strip separator characters from a serialized hash so it forms a single
/// path component.
fn sanitize_hash(hash: &str) -> String {
    hash.chars()
        .filter(|c| !matches!(c, ',' | '/' | '\\'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_under_focular_thumbnail_dir() {
        let path = resolve_in(Path::new("/cache"), "abc123");
        assert_eq!(path, Path::new("/cache/Focular/thumbnails/abc123.png"));
    }

    #[test]
    fn strips_separators_from_serialized_hashes() {
        // A hash serialized from a byte array renders with commas.
        let path = resolve_in(Path::new("/cache"), "12,34,56");
        assert_eq!(path, Path::new("/cache/Focular/thumbnails/123456.png"));

        assert_eq!(sanitize_hash("a/b\\c,d"), "abcd");
    }
}

//! Path validation
//!
//! Handles storage key validation and root containment checks.

use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Validate that a storage key is usable.
///
/// Keys must be non-empty, free of NUL bytes and made of non-empty
/// `/`-separated segments. A key such as `a//b` or `/a` would otherwise
/// collapse onto another key once cleaned.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey(key.to_string()));
    }

    if key.contains('\0') || key.split('/').any(str::is_empty) {
        return Err(StorageError::InvalidKey(key.to_string()));
    }

    Ok(())
}

/// Lexically normalize a filesystem path without touching the disk
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Check that `candidate` lies strictly below `root` once both are normalized
pub fn is_within_root(root: &Path, candidate: &Path) -> bool {
    let root = normalize_path(root);
    let candidate = normalize_path(candidate);
    candidate != root && candidate.starts_with(&root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("somefile.jpg").is_ok());
        assert!(validate_key("this/has/parts/somefile.jpg").is_ok());
        assert!(validate_key("../escape.jpg").is_ok());

        assert!(matches!(validate_key(""), Err(StorageError::InvalidKey(_))));
        assert!(validate_key("/rooted.jpg").is_err());
        assert!(validate_key("trailing/").is_err());
        assert!(validate_key("double//slash.jpg").is_err());
        assert!(validate_key("nul\0byte").is_err());
    }

    #[test]
    fn test_is_within_root() {
        let root = Path::new("/srv/store");
        assert!(is_within_root(root, Path::new("/srv/store/a.jpg")));
        assert!(is_within_root(root, Path::new("/srv/store/./x/../a.jpg")));
        assert!(!is_within_root(root, Path::new("/srv/store")));
        assert!(!is_within_root(root, Path::new("/srv/store/../other/a.jpg")));
        assert!(!is_within_root(root, Path::new("/srv/storefront/a.jpg")));
    }
}

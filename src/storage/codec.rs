//! Storage key codec
//!
//! Maps logical storage keys onto on-disk path fragments. Each `/`-separated
//! segment is percent-escaped on its own so the hierarchy survives while
//! anything that could alter path resolution is neutralised. Directory
//! segments carry a `%2F` marker, so an object named `a` and the directory
//! holding `a/b` never share an on-disk name.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::StorageError;
use crate::storage::validation::{is_within_root, normalize_path, validate_key};

const CURRENT_DIR_SEGMENT: &str = "%2E";
const PARENT_DIR_SEGMENT: &str = "%2E%2E";

/// Appended to every non-final segment. `/` never survives segment escaping,
/// so no encoded file name ends in a literal `%2F`.
const DIR_MARKER: &str = "%2F";

/// Longest encoded segment accepted. Leaves room below the usual 255-byte
/// file name limit for the store's upload suffix.
pub const MAX_SEGMENT_BYTES: usize = 240;

/// Encode a storage key into a filesystem-safe relative fragment.
///
/// Every byte outside `[A-Za-z0-9-._~]` is written as `%XX`, including `%`
/// itself, so distinct keys always produce distinct fragments. Segments that
/// are exactly `.` or `..` are escaped as well. Keys whose encoded segments
/// exceed [`MAX_SEGMENT_BYTES`] are rejected.
pub fn encode(key: &str) -> Result<String, StorageError> {
    validate_key(key)?;

    let mut segments: Vec<&str> = key.split('/').collect();
    let last = segments.pop().unwrap_or_default();

    let mut encoded = Vec::with_capacity(segments.len() + 1);
    for segment in segments {
        let mut dir = encode_segment(segment);
        dir.push_str(DIR_MARKER);
        encoded.push(dir);
    }
    encoded.push(encode_segment(last));

    if encoded.iter().any(|segment| segment.len() > MAX_SEGMENT_BYTES) {
        warn!("Rejected key {:?}: encoded segment too long", key);
        return Err(StorageError::InvalidKey(key.to_string()));
    }

    Ok(encoded.join("/"))
}

fn encode_segment(segment: &str) -> String {
    match segment {
        "." => CURRENT_DIR_SEGMENT.to_string(),
        ".." => PARENT_DIR_SEGMENT.to_string(),
        other => urlencoding::encode(other).into_owned(),
    }
}

/// Decode a fragment produced by [`encode`] back into its storage key.
///
/// Only canonical fragments are accepted: the decoded key must encode back to
/// the exact same fragment.
pub fn decode(fragment: &str) -> Result<String, StorageError> {
    let invalid = || StorageError::InvalidKey(fragment.to_string());
    if fragment.is_empty() {
        return Err(invalid());
    }

    let mut parts: Vec<&str> = fragment.split('/').collect();
    let last = parts.pop().unwrap_or_default();

    let mut segments = Vec::with_capacity(parts.len() + 1);
    for part in parts {
        let dir = part.strip_suffix(DIR_MARKER).ok_or_else(invalid)?;
        segments.push(urlencoding::decode(dir).map_err(|_| invalid())?.into_owned());
    }
    segments.push(urlencoding::decode(last).map_err(|_| invalid())?.into_owned());

    let key = segments.join("/");
    if encode(&key)? != fragment {
        return Err(invalid());
    }

    Ok(key)
}

/// Resolve a storage key to its physical path under `root`.
pub fn resolve(root: &Path, key: &str) -> Result<PathBuf, StorageError> {
    let fragment = encode(key)?;

    let mut path = root.to_path_buf();
    for segment in fragment.split('/') {
        path.push(segment);
    }
    let path = normalize_path(&path);

    if !is_within_root(root, &path) {
        warn!("Rejected key {:?} resolving outside {}", key, root.display());
        return Err(StorageError::PathTraversal(key.to_string()));
    }

    debug!("Resolved key {:?} to {}", key, path.display());
    Ok(path)
}

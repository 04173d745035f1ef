//! Storage port

use std::fs::File;
use std::io::Read;

use crate::error::StorageError;

/// Object store keyed by logical storage paths.
///
/// Implementations must reject a second `add` for the same key and report a
/// read miss as [`StorageError::ObjectNotFound`].
pub trait Storage {
    /// Persist the whole of `source` under `key`. `None` is rejected as an
    /// invalid source.
    fn add(&self, key: &str, source: Option<&mut dyn Read>) -> Result<(), StorageError>;

    /// Open the object stored under `key`, positioned at its start
    fn get_by_storage_path(&self, key: &str) -> Result<File, StorageError>;
}

//! File system storage
//!
//! Persists objects as plain files below a root directory. Writes go to a
//! temporary sibling first and are renamed into place once the whole stream
//! has been copied, so a failed upload never leaves a truncated object.

use log::{error, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::ports::Storage;
use crate::storage::codec;

/// Suffix appended to the final file name while an upload is in flight.
/// `%u` is never produced by the key codec, so it cannot collide with a key.
const UPLOAD_SUFFIX: &str = "%upload";

const BUFFER_SIZE: usize = 8192;

/// Filesystem-backed object store
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
    max_object_size: Option<u64>,
}

impl FsStore {
    /// Open a store at `root`, creating the directory tree if needed
    pub fn new(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(StorageError::RootUnavailable("empty root path".into()));
        }

        if let Err(e) = fs::create_dir_all(root) {
            error!("Failed to create storage root {}: {}", root.display(), e);
            return Err(StorageError::RootUnavailable(format!(
                "{}: {}",
                root.display(),
                e
            )));
        }

        if !root.is_dir() {
            return Err(StorageError::RootUnavailable(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        info!("Storage root directory: {}", root.display());

        Ok(Self {
            root: root.to_path_buf(),
            max_object_size: None,
        })
    }

    /// Limit the size of every object written from now on
    pub fn with_max_object_size(mut self, limit: Option<u64>) -> Self {
        self.max_object_size = limit;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_object_size(&self) -> Option<u64> {
        self.max_object_size
    }

    fn write_atomically(
        &self,
        key: &str,
        file_path: &Path,
        source: &mut dyn Read,
    ) -> Result<u64, StorageError> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = temp_path_for(file_path);
        let mut temp_file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                warn!("Upload already in progress for {}", key);
                return Err(StorageError::UploadInProgress(key.to_string()));
            }
            Err(e) => {
                error!("Failed to create temporary file {}: {}", temp_path.display(), e);
                return Err(StorageError::from(e));
            }
        };

        let written = match self.copy_limited(key, source, &mut temp_file) {
            Ok(written) => written,
            Err(e) => {
                drop(temp_file);
                let _ = fs::remove_file(&temp_path);
                return Err(e);
            }
        };

        drop(temp_file);

        // rename replaces an existing target
        if file_path.exists() {
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::DuplicateObject(key.to_string()));
        }

        if let Err(e) = fs::rename(&temp_path, file_path) {
            error!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                file_path.display(),
                e
            );
            let _ = fs::remove_file(&temp_path);
            return Err(StorageError::from(e));
        }

        Ok(written)
    }

    fn copy_limited(
        &self,
        key: &str,
        source: &mut dyn Read,
        target: &mut File,
    ) -> Result<u64, StorageError> {
        let mut buffer = [0u8; BUFFER_SIZE];
        let mut total = 0u64;

        loop {
            let n = match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    error!("Read failure while storing {}: {}", key, e);
                    return Err(StorageError::from(e));
                }
            };

            total += n as u64;
            if let Some(limit) = self.max_object_size {
                if total > limit {
                    warn!("Object {} exceeds size limit of {} bytes", key, limit);
                    return Err(StorageError::ObjectTooLarge {
                        key: key.to_string(),
                        limit,
                    });
                }
            }

            target.write_all(&buffer[..n])?;
        }

        target.flush()?;
        target.sync_all()?;
        Ok(total)
    }
}

impl Storage for FsStore {
    fn add(&self, key: &str, source: Option<&mut dyn Read>) -> Result<(), StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        let Some(source) = source else {
            return Err(StorageError::InvalidSource(key.to_string()));
        };

        let file_path = codec::resolve(&self.root, key)?;

        if fs::symlink_metadata(&file_path).is_ok() {
            warn!("Rejected duplicate write for {}", key);
            return Err(StorageError::DuplicateObject(key.to_string()));
        }

        let written = self.write_atomically(key, &file_path, source)?;

        info!(
            "Stored {} ({} bytes, real: {})",
            key,
            written,
            file_path.display()
        );
        Ok(())
    }

    fn get_by_storage_path(&self, key: &str) -> Result<File, StorageError> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        let file_path = codec::resolve(&self.root, key)?;

        if !file_path.is_file() {
            return Err(StorageError::ObjectNotFound(key.to_string()));
        }

        File::open(&file_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::ObjectNotFound(key.to_string()),
            _ => {
                error!("Failed to open {}: {}", file_path.display(), e);
                StorageError::from(e)
            }
        })
    }
}

fn temp_path_for(file_path: &Path) -> PathBuf {
    let mut name = file_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(UPLOAD_SUFFIX);
    file_path.with_file_name(name)
}

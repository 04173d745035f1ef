//! Error types
//!
//! Defines domain-specific error types for each module of the resizer.

use std::fmt;
use std::io;

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    InvalidKey(String),
    InvalidSource(String),
    DuplicateObject(String),
    ObjectNotFound(String),
    RootUnavailable(String),
    PathTraversal(String),
    UploadInProgress(String),
    ObjectTooLarge { key: String, limit: u64 },
    Io(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidKey(k) => write!(f, "Invalid storage key: {:?}", k),
            StorageError::InvalidSource(k) => write!(f, "Invalid source stream for: {}", k),
            StorageError::DuplicateObject(k) => write!(f, "Object already exists: {}", k),
            StorageError::ObjectNotFound(k) => write!(f, "Object not found: {}", k),
            StorageError::RootUnavailable(r) => write!(f, "Storage root unavailable: {}", r),
            StorageError::PathTraversal(k) => write!(f, "Path traversal attempt: {}", k),
            StorageError::UploadInProgress(k) => write!(f, "Upload already in progress: {}", k),
            StorageError::ObjectTooLarge { key, limit } => {
                write!(f, "Object {} exceeds the size limit of {} bytes", key, limit)
            }
            StorageError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::Io(error)
    }
}

/// Resize request errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    NoSourcePaths,
    InvalidWidth(i32),
    InvalidHeight(i32),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::NoSourcePaths => write!(f, "No image storage paths provided"),
            ResizeError::InvalidWidth(w) => write!(f, "Invalid width provided: {}", w),
            ResizeError::InvalidHeight(h) => write!(f, "Invalid height provided: {}", h),
        }
    }
}

impl std::error::Error for ResizeError {}

/// General resizer error that encompasses all error types
#[derive(Debug)]
pub enum ResizerError {
    Storage(StorageError),
    Resize(ResizeError),
    Config(config::ConfigError),
    Command(String),
    IoError(io::Error),
}

impl fmt::Display for ResizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizerError::Storage(e) => write!(f, "Storage error: {}", e),
            ResizerError::Resize(e) => write!(f, "Resize error: {}", e),
            ResizerError::Config(e) => write!(f, "Configuration error: {}", e),
            ResizerError::Command(e) => write!(f, "Command error: {}", e),
            ResizerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ResizerError {}

impl From<StorageError> for ResizerError {
    fn from(error: StorageError) -> Self {
        ResizerError::Storage(error)
    }
}

impl From<ResizeError> for ResizerError {
    fn from(error: ResizeError) -> Self {
        ResizerError::Resize(error)
    }
}

impl From<config::ConfigError> for ResizerError {
    fn from(error: config::ConfigError) -> Self {
        ResizerError::Config(error)
    }
}

impl From<io::Error> for ResizerError {
    fn from(error: io::Error) -> Self {
        ResizerError::IoError(error)
    }
}

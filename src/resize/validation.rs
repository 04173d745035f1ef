//! Resize request validation

use crate::domain::ResizeRequestConfig;
use crate::error::ResizeError;

/// Smallest accepted width or height
pub const MIN_DIMENSION: i32 = 1;

/// Validate a request. Checks run in a fixed order and the first failure wins:
/// source paths, then width, then height.
pub fn validate_request(config: &ResizeRequestConfig) -> Result<(), ResizeError> {
    if config.source_file_storage_paths.is_empty() {
        return Err(ResizeError::NoSourcePaths);
    }
    if config.width < MIN_DIMENSION {
        return Err(ResizeError::InvalidWidth(config.width));
    }
    if config.height < MIN_DIMENSION {
        return Err(ResizeError::InvalidHeight(config.height));
    }
    Ok(())
}

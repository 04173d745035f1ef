//! Error handlers
//!
//! Provides error reporting and exit code mapping.

use crate::error::types::{ResizerError, StorageError};
use log::error;

/// Handle a resizer error
pub fn handle_error(err: &ResizerError) {
    error!("Resizer error: {}", err);
}

/// Convert error to a process exit code
///
/// Caller mistakes map to 2, missing objects to 3, write conflicts to 4 and
/// infrastructure failures to 1.
pub fn error_to_exit_code(err: &ResizerError) -> u8 {
    match err {
        ResizerError::Storage(e) => match e {
            StorageError::InvalidKey(_)
            | StorageError::InvalidSource(_)
            | StorageError::PathTraversal(_)
            | StorageError::ObjectTooLarge { .. } => 2,
            StorageError::ObjectNotFound(_) => 3,
            StorageError::DuplicateObject(_) | StorageError::UploadInProgress(_) => 4,
            StorageError::RootUnavailable(_) | StorageError::Io(_) => 1,
        },
        ResizerError::Resize(_) => 2,
        ResizerError::Command(_) => 2,
        ResizerError::Config(_) => 1,
        ResizerError::IoError(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::ResizeError;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let not_found = ResizerError::from(StorageError::ObjectNotFound("a.jpg".into()));
        assert_eq!(error_to_exit_code(&not_found), 3);

        let duplicate = ResizerError::from(StorageError::DuplicateObject("a.jpg".into()));
        assert_eq!(error_to_exit_code(&duplicate), 4);

        let invalid = ResizerError::from(ResizeError::InvalidWidth(0));
        assert_eq!(error_to_exit_code(&invalid), 2);

        let io = ResizerError::from(StorageError::from(io::Error::other("disk")));
        assert_eq!(error_to_exit_code(&io), 1);

        let long_key = format!("{}.jpg", "é".repeat(50));
        let too_long = ResizerError::from(StorageError::InvalidKey(long_key));
        assert_eq!(error_to_exit_code(&too_long), 2);
    }
}

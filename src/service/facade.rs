//! Resize service facade

use log::info;

use crate::domain::{ResizeRequestConfig, ResizeResponse};
use crate::error::ResizeError;
use crate::ports::{Service, Storage};
use crate::resize;

/// Service facade over the resize orchestration.
///
/// Holds the store the future pixel pipeline will read sources from and write
/// results to. Today `resize` only computes destination keys.
pub struct ResizeService<S: Storage> {
    store: S,
}

impl<S: Storage> ResizeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: Storage> Service for ResizeService<S> {
    fn resize(&self, config: ResizeRequestConfig) -> Result<ResizeResponse, ResizeError> {
        info!(
            "Resize requested for {} file(s) at {}x{}",
            config.source_file_storage_paths.len(),
            config.width,
            config.height
        );
        resize::plan(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use std::fs::File;
    use std::io::Read;

    /// Store that fails every call, proving `resize` never touches it
    struct UnreachableStore;

    impl Storage for UnreachableStore {
        fn add(&self, key: &str, _source: Option<&mut dyn Read>) -> Result<(), StorageError> {
            panic!("unexpected add for {key}");
        }

        fn get_by_storage_path(&self, key: &str) -> Result<File, StorageError> {
            panic!("unexpected get for {key}");
        }
    }

    fn service() -> ResizeService<UnreachableStore> {
        ResizeService::new(UnreachableStore)
    }

    #[test]
    fn test_resize_no_paths() {
        let res = service().resize(ResizeRequestConfig::new(
            200,
            200,
            "thumbnail",
            Vec::<String>::new(),
        ));
        assert_eq!(res, Err(ResizeError::NoSourcePaths));
    }

    #[test]
    fn test_resize_zero_width() {
        let res = service().resize(ResizeRequestConfig::new(
            0,
            200,
            "thumbnail",
            ["some/storage/path.jpg"],
        ));
        assert_eq!(res, Err(ResizeError::InvalidWidth(0)));
    }

    #[test]
    fn test_resize_zero_height() {
        let res = service().resize(ResizeRequestConfig::new(
            200,
            0,
            "thumbnail",
            ["some/storage/path.jpg"],
        ));
        assert_eq!(res, Err(ResizeError::InvalidHeight(0)));
    }

    #[test]
    fn test_resize_defaults_suffix() {
        let res = service()
            .resize(ResizeRequestConfig::new(
                200,
                300,
                "",
                ["some/storage/path.jpg", "another/files/path.jpg"],
            ))
            .unwrap();
        assert_eq!(
            res.resized_images_storage_paths,
            vec![
                "some/storage/path--resized-200-300.jpg",
                "another/files/path--resized-200-300.jpg"
            ]
        );
    }

    #[test]
    fn test_resize_does_not_check_existence() {
        // sources that were never stored still get a destination key
        let res = service()
            .resize(ResizeRequestConfig::new(50, 50, "-small", ["never/stored.png"]))
            .unwrap();
        assert_eq!(res.resized_images_storage_paths, vec!["never/stored-small.png"]);
    }
}

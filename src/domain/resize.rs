//! Resize request and response types

use serde::{Deserialize, Serialize};

/// A batch resize request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeRequestConfig {
    pub width: i32,
    pub height: i32,
    /// Inserted before each file extension; empty selects the default
    #[serde(default)]
    pub filename_suffix: String,
    pub source_file_storage_paths: Vec<String>,
}

impl ResizeRequestConfig {
    pub fn new<I, S>(width: i32, height: i32, filename_suffix: &str, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            width,
            height,
            filename_suffix: filename_suffix.to_string(),
            source_file_storage_paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

/// Destination keys, one per source key and in the same order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeResponse {
    pub resized_images_storage_paths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_new_collects_paths_in_order() {
        let config = ResizeRequestConfig::new(200, 300, "", ["a/b.jpg", "c/d.jpg"]);
        assert_eq!(config.width, 200);
        assert_eq!(config.height, 300);
        assert!(config.filename_suffix.is_empty());
        assert_eq!(config.source_file_storage_paths, vec!["a/b.jpg", "c/d.jpg"]);
    }

    #[test]
    fn test_response_default_is_empty() {
        assert!(ResizeResponse::default().resized_images_storage_paths.is_empty());
    }
}

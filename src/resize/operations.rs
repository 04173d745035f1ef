//! Destination key computation

use log::{debug, info, warn};

use crate::domain::{ResizeRequestConfig, ResizeResponse};
use crate::error::ResizeError;
use crate::resize::validation::validate_request;
use crate::utils::paths::lexical_clean;

/// Suffix used when the request leaves it empty
pub fn default_suffix(width: i32, height: i32) -> String {
    format!("--resized-{}-{}", width, height)
}

/// Validate a request and compute the destination key of every source key.
///
/// The batch is all-or-nothing: a validation failure rejects the whole
/// request, after which every destination is computed. Source keys are not
/// looked up in any store.
pub fn plan(config: &ResizeRequestConfig) -> Result<ResizeResponse, ResizeError> {
    if let Err(e) = validate_request(config) {
        warn!("Rejected resize request: {}", e);
        return Err(e);
    }

    let suffix = if config.filename_suffix.is_empty() {
        default_suffix(config.width, config.height)
    } else {
        config.filename_suffix.clone()
    };

    // TODO: benchmark a concurrent pipeline once pixel resizing exists
    let resized_images_storage_paths: Vec<String> = config
        .source_file_storage_paths
        .iter()
        .map(|source| {
            let destination = add_suffix(source, &suffix);
            debug!("{} -> {}", source, destination);
            destination
        })
        .collect();

    info!(
        "Planned {} resized image(s) at {}x{}",
        resized_images_storage_paths.len(),
        config.width,
        config.height
    );

    Ok(ResizeResponse {
        resized_images_storage_paths,
    })
}

/// Insert `suffix` right before the extension of the final path segment.
///
/// `dir/pic.jpg` with `-thumb` becomes `dir/pic-thumb.jpg`; a key without an
/// extension simply gets the suffix appended. The suffix is lexically cleaned
/// first. An empty key or suffix returns the key unchanged.
pub fn add_suffix(orig_path: &str, suffix: &str) -> String {
    if orig_path.is_empty() || suffix.is_empty() {
        return orig_path.to_string();
    }

    let ext = extension(orig_path);
    let base = &orig_path[..orig_path.len() - ext.len()];
    let suffix = lexical_clean(suffix);

    let mut out = String::with_capacity(base.len() + suffix.len() + ext.len());
    out.push_str(base);
    out.push_str(&suffix);
    out.push_str(ext);
    out
}

/// Portion of the final segment starting at its last `.`, or empty
fn extension(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) => &path[name_start + dot..],
        None => "",
    }
}

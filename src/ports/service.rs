//! Service port

use crate::domain::{ResizeRequestConfig, ResizeResponse};
use crate::error::ResizeError;

/// Entry point consumed by API layers
pub trait Service {
    fn resize(&self, config: ResizeRequestConfig) -> Result<ResizeResponse, ResizeError>;
}

//! Domain types
//!
//! Value types exchanged between the service and its callers.

mod resize;

pub use resize::{ResizeRequestConfig, ResizeResponse};

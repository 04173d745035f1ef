//! Resize service
//!
//! Facade composing the resize orchestration with a store.

mod facade;

pub use facade::ResizeService;

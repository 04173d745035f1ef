pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod resize;
pub mod service;
pub mod storage;
pub mod utils;

pub use domain::{ResizeRequestConfig, ResizeResponse};
pub use error::{ResizeError, ResizerError, StorageError};
pub use ports::{Service, Storage};
pub use service::ResizeService;
pub use storage::FsStore;

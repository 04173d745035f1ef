//! Ports
//!
//! Capability traits at the seams between the core and its adapters.

pub mod service;
pub mod storage;

pub use service::Service;
pub use storage::Storage;

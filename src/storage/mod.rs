//! File system storage management
//!
//! Handles key encoding, path validation and object persistence.

pub mod codec;
pub mod filesystem;
pub mod validation;

pub use filesystem::FsStore;
pub use validation::validate_key;

//! Error handling
//!
//! Defines error types and handling for the resizer.

pub mod handlers;
pub mod types;

pub use types::*;

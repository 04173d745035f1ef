//! Utility functions
//!
//! Provides logging setup and lexical path helpers.

pub mod logging;
pub mod paths;

//! Resize orchestration
//!
//! Validates batch resize requests and computes the storage keys the resized
//! images will be written under. Pure path computation: the store is never
//! consulted and no pixels are touched.

mod operations;
mod validation;

pub use operations::{add_suffix, default_suffix, plan};
pub use validation::{MIN_DIMENSION, validate_request};

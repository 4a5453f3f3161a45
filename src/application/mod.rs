//! Application layer: services and use cases
//!
//! This layer decodes input, drives the domain builder and formats its result.
//! It depends on the input boundary trait, never on stdin or files directly.

pub mod error;
pub mod error_ext;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::{source_label, IoResultExt};

//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (InputReader)
//! but are themselves concrete structs, not traits.

mod keypath;

pub use keypath::{KeyPathOutput, KeyPathService};

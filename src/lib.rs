//! Key-path trees for Lottie animations.
//!
//! A Lottie document is walked the way a key path addresses it: every named
//! layer, shape or precomp becomes a tree node, unnamed wrappers are looked
//! through, and layers referring to a precomp (`refId`) are replaced by the
//! precomp's own subtree.
//!
//! ```ignore
//! let document: serde_json::Value = serde_json::from_str(body)?;
//! let tree = lottie_keypath::domain::build_tree(&document)?;
//! print!("{}", lottie_keypath::domain::render(&tree, ""));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{build_tree, render, DomainError, KeyPathTree};

//! Domain layer: key-path tree model and the reference-resolving builder
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! It consumes an already decoded document and never mutates it.

pub mod arena;
pub mod builder;
pub mod document;
pub mod error;
pub mod index;
pub mod render;
pub mod resolver;

pub use arena::{KeyPathTree, NodeData, TreeNode};
pub use builder::{build_tree, TreeBuilder, MAX_NESTING};
pub use error::{DomainError, DomainResult};
pub use index::DefinitionIndex;
pub use render::{render, render_with_unit, TreeNodeConvert, INDENT_UNIT};
pub use resolver::{resolve_self, Resolution};

//! Key-path tree builder: walks a Lottie document, expanding precomp references.

use std::collections::HashSet;

use generational_arena::Index;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use crate::domain::arena::{KeyPathTree, NodeData};
use crate::domain::document::{name_of, structured_children, ASSETS_KEY};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::index::DefinitionIndex;
use crate::domain::resolver::resolve_self;

/// Deepest structural nesting the builder descends into, counting every
/// object, array and precomp hop below the root.
pub const MAX_NESTING: usize = 512;

/// Per-call context threaded through the recursion.
///
/// A new context is derived only when a named node opens a new tree level.
#[derive(Debug, Clone, Copy)]
struct BuildContext<'i, 'a> {
    index: &'i DefinitionIndex<'a>,
    parent: Index,
}

impl BuildContext<'_, '_> {
    fn with_parent(self, parent: Index) -> Self {
        Self { parent, ..self }
    }
}

/// Constructs key-path trees from decoded Lottie documents.
///
/// The document is only borrowed: the `assets` collection is indexed and then
/// skipped while walking the root, instead of being removed.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Precomp ids being expanded on the current recursion path
    expanding: HashSet<String>,
    /// Current recursion depth below the root
    depth: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the key-path tree of `document`.
    ///
    /// Fails with [`DomainError::MissingRootName`] when the root carries no
    /// name, and with [`DomainError::CyclicReference`] when a precomp
    /// (directly or indirectly) references itself. Documents nesting deeper
    /// than [`MAX_NESTING`] fail with [`DomainError::NestingTooDeep`].
    #[instrument(level = "debug", skip(self, document))]
    pub fn build(&mut self, document: &Value) -> DomainResult<KeyPathTree> {
        let root_name = name_of(document).ok_or(DomainError::MissingRootName)?;
        let index = DefinitionIndex::from_document(document);
        self.expanding.clear();
        self.depth = 0;

        let resolution = resolve_self(document, &index);
        self.enter(resolution.followed)?;

        let mut tree = KeyPathTree::new();
        let name = name_of(resolution.effective).unwrap_or(root_name);
        let root = tree.insert_node(NodeData { name: name.to_string() }, None);
        let context = BuildContext {
            index: &index,
            parent: root,
        };

        let walking_root = resolution.followed.is_none();
        for (key, child) in structured_children(resolution.effective) {
            if walking_root && key == Some(ASSETS_KEY) {
                continue;
            }
            self.build_node(&mut tree, child, context)?;
        }
        self.leave(resolution.followed);

        debug!("built key-path tree: {} nodes, depth {}", tree.len(), tree.depth());
        Ok(tree)
    }

    fn build_node<'a>(
        &mut self,
        tree: &mut KeyPathTree,
        node: &'a Value,
        context: BuildContext<'_, 'a>,
    ) -> DomainResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(DomainError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;

        let resolution = resolve_self(node, context.index);
        self.enter(resolution.followed)?;

        // unnamed nodes are transparent: their children attach to the parent
        let ref_node = match name_of(resolution.effective) {
            Some(name) => {
                trace!("node: {}", name);
                tree.insert_node(NodeData { name: name.to_string() }, Some(context.parent))
            }
            None => context.parent,
        };

        let child_context = context.with_parent(ref_node);
        for (_, child) in structured_children(resolution.effective) {
            self.build_node(tree, child, child_context)?;
        }

        self.leave(resolution.followed);
        self.depth -= 1;
        Ok(())
    }

    fn enter(&mut self, followed: Option<&str>) -> DomainResult<()> {
        if let Some(id) = followed {
            trace!("expanding precomp: {}", id);
            if !self.expanding.insert(id.to_string()) {
                return Err(DomainError::CyclicReference { id: id.to_string() });
            }
        }
        Ok(())
    }

    fn leave(&mut self, followed: Option<&str>) {
        if let Some(id) = followed {
            self.expanding.remove(id);
        }
    }
}

/// Build the key-path tree of `document` with a fresh [`TreeBuilder`].
pub fn build_tree(document: &Value) -> DomainResult<KeyPathTree> {
    TreeBuilder::new().build(document)
}

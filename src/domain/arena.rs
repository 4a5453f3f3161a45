use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload for key-path tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Display name (`nm`) of the layer, shape or precomp
    pub name: String,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based key-path structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Named entity for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in document order
    pub children: Vec<Index>,
}

/// Arena-based key-path tree.
///
/// Nodes are appended under their parent when created and never moved or
/// removed, so the tree is finite and acyclic by construction.
#[derive(Debug)]
pub struct KeyPathTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for KeyPathTree {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPathTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Name of the node at `idx`.
    pub fn name(&self, idx: Index) -> Option<&str> {
        self.get_node(idx).map(|node| node.data.name.as_str())
    }

    /// Child indices of the node at `idx` (empty for unknown indices).
    pub fn children(&self, idx: Index) -> &[Index] {
        self.get_node(idx)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((node_idx, level)) = stack.pop() {
            max_depth = max_depth.max(level);
            stack.extend(self.children(node_idx).iter().map(|&child| (child, level + 1)));
        }
        max_depth
    }

    /// Collects the names of all leaf nodes (nodes with no children), in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }

    /// Key paths from the root to every leaf, names joined by `separator`.
    #[instrument(level = "debug", skip(self))]
    pub fn key_paths(&self, separator: &str) -> Vec<String> {
        let mut paths = Vec::new();
        let mut path: Vec<&str> = Vec::new();
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 0)).into_iter().collect();
        while let Some((node_idx, level)) = stack.pop() {
            let Some(node) = self.get_node(node_idx) else {
                continue;
            };
            path.truncate(level);
            path.push(node.data.name.as_str());
            if node.children.is_empty() {
                paths.push(path.join(separator));
            }
            // reversed so siblings come off the stack in document order
            stack.extend(node.children.iter().rev().map(|&child| (child, level + 1)));
        }
        paths
    }
}

pub struct TreeIterator<'a> {
    tree: &'a KeyPathTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a KeyPathTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a KeyPathTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a KeyPathTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Root
    // ├── A
    // │   └── A1
    // └── B
    fn sample() -> KeyPathTree {
        let mut tree = KeyPathTree::new();
        let root = tree.insert_node(NodeData { name: "Root".into() }, None);
        let a = tree.insert_node(NodeData { name: "A".into() }, Some(root));
        tree.insert_node(NodeData { name: "A1".into() }, Some(a));
        tree.insert_node(NodeData { name: "B".into() }, Some(root));
        tree
    }

    #[test]
    fn given_tree_when_iterating_then_preorder() {
        let tree = sample();
        let names: Vec<_> = tree.iter().map(|(_, n)| n.data.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "A", "A1", "B"]);
    }

    #[test]
    fn given_tree_when_iterating_postorder_then_children_first() {
        let tree = sample();
        let names: Vec<_> = tree
            .iter_postorder()
            .map(|(_, n)| n.data.name.as_str())
            .collect();
        assert_eq!(names, vec!["A1", "A", "B", "Root"]);
    }

    #[test]
    fn given_tree_when_measuring_then_depth_and_leaves() {
        let tree = sample();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.leaf_nodes(), vec!["A1", "B"]);
    }

    #[test]
    fn given_tree_when_listing_key_paths_then_root_to_leaf() {
        let tree = sample();
        assert_eq!(tree.key_paths("."), vec!["Root.A.A1", "Root.B"]);
    }

    #[test]
    fn given_very_deep_tree_when_measuring_then_no_recursion_limit() {
        let mut tree = KeyPathTree::new();
        let mut parent = tree.insert_node(NodeData { name: "N0".into() }, None);
        for i in 1..100_000 {
            parent = tree.insert_node(NodeData { name: format!("N{i}") }, Some(parent));
        }
        assert_eq!(tree.depth(), 100_000);
        assert_eq!(tree.key_paths("").len(), 1);
    }

    #[test]
    fn given_empty_tree_when_measuring_then_zero() {
        let tree = KeyPathTree::new();
        assert_eq!(tree.depth(), 0);
        assert!(tree.is_empty());
        assert!(tree.key_paths(".").is_empty());
    }
}

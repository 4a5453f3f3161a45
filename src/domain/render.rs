//! Text rendering of key-path trees

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::KeyPathTree;

/// Indent added per tree level by [`render`].
pub const INDENT_UNIT: &str = "  ";

/// Render `tree` as one `indent + name` line per node, children indented by
/// two more spaces. Empty trees render as the empty string.
pub fn render(tree: &KeyPathTree, indent: &str) -> String {
    render_with_unit(tree, indent, INDENT_UNIT)
}

/// Like [`render`] but with a custom per-level indent unit.
pub fn render_with_unit(tree: &KeyPathTree, indent: &str, unit: &str) -> String {
    let mut out = String::new();
    let mut stack: Vec<(Index, usize)> = tree.root().map(|root| (root, 0)).into_iter().collect();
    while let Some((idx, level)) = stack.pop() {
        let Some(name) = tree.name(idx) else {
            continue;
        };
        out.push_str(indent);
        for _ in 0..level {
            out.push_str(unit);
        }
        out.push_str(name);
        out.push('\n');

        stack.extend(tree.children(idx).iter().rev().map(|&child| (child, level + 1)));
    }
    out
}

/*
termtree::Tree is a foreign type, so the conversion lives in a local trait.
 */
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for KeyPathTree {
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(tree: &KeyPathTree, node_idx: Index, parent_tree: &mut Tree<String>) {
            for &child_idx in tree.children(node_idx) {
                if let Some(name) = tree.name(child_idx) {
                    let mut child_tree = Tree::new(name.to_string());
                    build_tree(tree, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        match self.root().and_then(|idx| self.name(idx).map(|name| (idx, name))) {
            Some((root_idx, name)) => {
                let mut tree = Tree::new(name.to_string());
                build_tree(self, root_idx, &mut tree);
                tree
            }
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arena::NodeData;

    fn sample() -> KeyPathTree {
        let mut tree = KeyPathTree::new();
        let root = tree.insert_node(NodeData { name: "Root".into() }, None);
        let comp = tree.insert_node(NodeData { name: "Comp1".into() }, Some(root));
        tree.insert_node(NodeData { name: "Shape1".into() }, Some(comp));
        tree.insert_node(NodeData { name: "L2".into() }, Some(root));
        tree
    }

    #[test]
    fn given_tree_when_rendering_then_two_space_levels() {
        assert_eq!(
            render(&sample(), ""),
            "Root\n  Comp1\n    Shape1\n  L2\n"
        );
    }

    #[test]
    fn given_initial_indent_when_rendering_then_prefixed_on_every_line() {
        assert_eq!(
            render(&sample(), "> "),
            "> Root\n>   Comp1\n>     Shape1\n>   L2\n"
        );
    }

    #[test]
    fn given_custom_unit_when_rendering_then_used_per_level() {
        assert_eq!(
            render_with_unit(&sample(), "", "\t"),
            "Root\n\tComp1\n\t\tShape1\n\tL2\n"
        );
    }

    #[test]
    fn given_very_deep_tree_when_rendering_then_every_level_indented() {
        let mut tree = KeyPathTree::new();
        let mut parent = tree.insert_node(NodeData { name: "N".into() }, None);
        for _ in 1..5_000 {
            parent = tree.insert_node(NodeData { name: "N".into() }, Some(parent));
        }
        let rendered = render_with_unit(&tree, "", " ");
        assert_eq!(rendered.lines().count(), 5_000);
        assert_eq!(rendered.lines().last().map(str::len), Some(5_000));
    }

    #[test]
    fn given_empty_tree_when_rendering_then_empty_string() {
        assert_eq!(render(&KeyPathTree::new(), ""), "");
    }

    #[test]
    fn given_tree_when_rendering_twice_then_identical() {
        let tree = sample();
        assert_eq!(render(&tree, ""), render(&tree, ""));
    }

    #[test]
    fn given_tree_when_converting_to_termtree_then_box_drawing() {
        let rendered = sample().to_tree_string().to_string();
        assert_eq!(rendered, "Root\n├── Comp1\n│   └── Shape1\n└── L2\n");
    }
}

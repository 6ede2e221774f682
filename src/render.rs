//! Terminal rendering of the menu tree view

use termtree::Tree;
use tracing::instrument;

use crate::domain::{MenuTree, MenuTreeNode};

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

fn node_label(id: u64, node: &MenuTreeNode) -> String {
    format!("{} {}", id, node.name)
}

fn build_leaves(tree: &MenuTree) -> Vec<Tree<String>> {
    tree.iter()
        .map(|(&id, node)| {
            let leaves = node.children.as_ref().map(build_leaves).unwrap_or_default();
            Tree::new(node_label(id, node)).with_leaves(leaves)
        })
        .collect()
}

impl TreeRender for MenuTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        if self.is_empty() {
            return Tree::new("Empty tree".to_string());
        }
        Tree::new("menus".to_string()).with_leaves(build_leaves(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IdManage;

    #[test]
    fn given_registry_when_rendering_then_lists_nested_labels() {
        let mut registry = IdManage::new();
        registry.create(None, "A").unwrap();
        registry.create(Some(10), "D").unwrap();
        registry.create(None, "B").unwrap();

        let rendered = registry.tree().to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "menus");
        assert!(lines[1].ends_with("10 A"));
        assert!(lines[2].ends_with("1010 D"));
        assert!(lines[3].ends_with("11 B"));
    }

    #[test]
    fn given_empty_view_when_rendering_then_says_so() {
        let rendered = IdManage::new().tree().to_tree_string().to_string();
        assert_eq!(rendered.trim_end(), "Empty tree");
    }
}

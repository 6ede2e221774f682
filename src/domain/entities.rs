//! Domain entities: menu records and the materialized tree view

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A menu record in the flat store.
///
/// Links to other menus are ids, never references: `parent` points up,
/// `children` lists the ids allocated below this menu in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: u64,
    pub name: String,
    /// None for top-level menus
    pub parent: Option<u64>,
    /// None until the first child is created, append-only afterwards
    pub children: Option<Vec<u64>>,
    /// false once soft-deleted
    pub active: bool,
}

impl Menu {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Id of the most recently allocated child, if any.
    pub fn last_child(&self) -> Option<u64> {
        self.children.as_ref().and_then(|ids| ids.last().copied())
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// Nested view of the visible menus, keyed by id.
///
/// Sibling ids grow with creation order, so ascending key order is creation order.
pub type MenuTree = BTreeMap<u64, MenuTreeNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuTreeNode {
    pub name: String,
    /// None when the menu never had children; an empty map when all of them are hidden
    pub children: Option<MenuTree>,
}

impl MenuTreeNode {
    /// Number of levels in this subtree, counting the node itself.
    pub fn depth(&self) -> usize {
        1 + self.children.as_ref().map_or(0, tree_depth)
    }
}

/// Number of levels in a tree view; 0 for an empty view.
pub fn tree_depth(tree: &MenuTree) -> usize {
    tree.values().map(MenuTreeNode::depth).max().unwrap_or(0)
}

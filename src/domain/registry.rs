//! Identifier registry: allocates hierarchical menu ids over a flat record store.
//!
//! Child ids are derived from their parent: the first child of menu `P` gets the
//! decimal concatenation of `P` and the start id (`10` -> `1010`), later siblings
//! count up from the last one. Top-level menus count up from the start id.

use tracing::{debug, instrument, trace};

use crate::domain::entities::{tree_depth, Menu, MenuTree, MenuTreeNode};
use crate::domain::error::{RegistryError, RegistryResult};

/// Start id used when none is configured. Two digits leave room for 90 siblings
/// before the id gains a digit.
pub const DEFAULT_START_ID: u64 = 10;

/// Flat, append-only menu store.
///
/// Records are never removed: `remove` only clears the `active` flag and the
/// tree view decides what is visible.
#[derive(Debug, Clone)]
pub struct IdManage {
    storage: Vec<Menu>,
    start_id: u64,
}

impl Default for IdManage {
    fn default() -> Self {
        Self::new()
    }
}

impl IdManage {
    pub fn new() -> Self {
        Self::with_start_id(DEFAULT_START_ID)
    }

    pub fn with_start_id(start_id: u64) -> Self {
        Self {
            storage: Vec::new(),
            start_id,
        }
    }

    pub fn start_id(&self) -> u64 {
        self.start_id
    }

    /// All records in creation order, soft-deleted ones included.
    pub fn storage(&self) -> &[Menu] {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Looks up a record by id regardless of its state.
    pub fn get(&self, id: u64) -> Option<&Menu> {
        self.storage.iter().find(|menu| menu.id == id)
    }

    /// Creates a menu below `parent_id` (None for top-level), or reactivates
    /// the record already stored for the same `(parent_id, name)` pair.
    ///
    /// # Errors
    ///
    /// * `ParentNotFound` if no record has id `parent_id`, active or not.
    /// * `EmptyName` if `name` is empty or whitespace-only.
    /// * `IdOverflow` / `IdTaken` if no unique id can be allocated.
    ///
    /// The registry is left untouched on error.
    #[instrument(level = "debug", skip(self))]
    pub fn create(&mut self, parent_id: Option<u64>, name: &str) -> RegistryResult<&Menu> {
        if let Some(pos) = self.cache_position(parent_id, name) {
            let menu = &mut self.storage[pos];
            if !menu.active {
                debug!(id = menu.id, "reactivating menu");
            }
            menu.active = true;
            return Ok(&*menu);
        }

        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let id = match parent_id {
            Some(parent) => self.next_child_id(parent)?,
            None => self.next_top_level_id()?,
        };
        if self.get(id).is_some() {
            return Err(RegistryError::IdTaken(id));
        }

        if let Some(parent) = parent_id {
            if let Some(parent) = self.storage.iter_mut().find(|menu| menu.id == parent) {
                parent.children.get_or_insert_with(Vec::new).push(id);
            }
        }

        debug!(id, "allocated menu id");
        let pos = self.storage.len();
        self.storage.push(Menu {
            id,
            name: name.to_string(),
            parent: parent_id,
            children: None,
            active: true,
        });
        Ok(&self.storage[pos])
    }

    /// Soft-deletes a menu. Descendants keep their own state.
    ///
    /// Returns the now inactive record, or None for an unknown id.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: u64) -> Option<&Menu> {
        let menu = self.storage.iter_mut().find(|menu| menu.id == id)?;
        menu.active = false;
        debug!(id, "menu deactivated");
        Some(&*menu)
    }

    /// Finds the record stored for `(parent_id, name)`, active or not.
    pub fn get_cache(&self, parent_id: Option<u64>, name: &str) -> Option<&Menu> {
        self.cache_position(parent_id, name)
            .map(|pos| &self.storage[pos])
    }

    fn cache_position(&self, parent_id: Option<u64>, name: &str) -> Option<usize> {
        self.storage
            .iter()
            .position(|menu| menu.parent == parent_id && menu.name == name)
    }

    #[instrument(level = "trace", skip(self))]
    fn next_top_level_id(&self) -> RegistryResult<u64> {
        match self.storage.iter().rev().find(|menu| menu.is_top_level()) {
            Some(last) => last
                .id
                .checked_add(1)
                .ok_or(RegistryError::IdOverflow { parent: None }),
            None => Ok(self.start_id),
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn next_child_id(&self, parent_id: u64) -> RegistryResult<u64> {
        let parent = self
            .get(parent_id)
            .ok_or(RegistryError::ParentNotFound(parent_id))?;
        let overflow = RegistryError::IdOverflow {
            parent: Some(parent_id),
        };
        match parent.last_child() {
            Some(last) => last.checked_add(1).ok_or(overflow),
            None => concat_ids(parent.id, self.start_id).ok_or(overflow),
        }
    }

    /// Materializes the visible hierarchy.
    ///
    /// Only active menus reachable from an active top-level menu through
    /// active ancestors appear; a soft-deleted menu hides its whole subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn tree(&self) -> MenuTree {
        self.storage
            .iter()
            .filter(|menu| menu.is_top_level() && menu.active)
            .map(|menu| (menu.id, self.tree_node(menu)))
            .collect()
    }

    fn tree_node(&self, menu: &Menu) -> MenuTreeNode {
        trace!(id = menu.id, "visiting menu");
        let children = menu.children.as_ref().map(|ids| {
            ids.iter()
                .filter_map(|&id| self.get(id))
                .filter(|child| child.active)
                .map(|child| (child.id, self.tree_node(child)))
                .collect()
        });
        MenuTreeNode {
            name: menu.name.clone(),
            children,
        }
    }

    /// Depth of the visible hierarchy; 0 when nothing is visible.
    pub fn depth(&self) -> usize {
        tree_depth(&self.tree())
    }
}

/// Decimal concatenation of two ids: `concat_ids(10, 10) == Some(1010)`.
fn concat_ids(prefix: u64, suffix: u64) -> Option<u64> {
    format!("{prefix}{suffix}").parse().ok()
}

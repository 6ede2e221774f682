//! Domain layer: menu records, the id registry and the tree view
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod registry;

pub use entities::{Menu, MenuTree, MenuTreeNode};
pub use error::{RegistryError, RegistryResult};
pub use registry::{IdManage, DEFAULT_START_ID};

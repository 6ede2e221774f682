//! Hierarchical numeric ids for menu trees, kept in a flat record store.
//!
//! ```
//! use menuid::IdManage;
//!
//! let mut menus = IdManage::new();
//! menus.create(None, "Menus").unwrap();
//! let child = menus.create(Some(10), "Add menu").unwrap();
//! assert_eq!(child.id, 1010);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod render;
pub mod util;

pub use domain::{IdManage, Menu, MenuTree, MenuTreeNode, RegistryError};

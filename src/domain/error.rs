//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Registry errors represent rejected `create` calls.
/// A failed call never mutates the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("parent menu not found: {0}")]
    ParentNotFound(u64),

    #[error("menu name must not be empty")]
    EmptyName,

    #[error("id space exhausted (parent: {parent:?})")]
    IdOverflow { parent: Option<u64> },

    #[error("allocated id already in use: {0}")]
    IdTaken(u64),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

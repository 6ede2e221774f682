//! Application layer: operation scripts replayed against the registry
//!
//! This layer orchestrates domain logic; file access stays with the caller.

pub mod error;
pub mod error_ext;
pub mod script;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use script::{Operation, ReplayReport, Script, ScriptLine};

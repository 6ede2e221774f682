//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::RegistryError;

/// Application errors wrap registry errors and add script/config context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("line {line}: {source}")]
    Registry {
        line: usize,
        #[source]
        source: RegistryError,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

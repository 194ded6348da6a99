//! Application-level errors (wraps domain and infrastructure errors)

use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// Application errors wrap lower-layer errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Crypto(#[from] InfraError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{context}: {source}")]
    OperationFailed {
        context: String,
        kind: IoStage,
        #[source]
        source: std::io::Error,
    },
}

/// Which side of the pipeline an I/O failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoStage {
    Input,
    Output,
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

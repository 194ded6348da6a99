//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::{ApplicationError, IoStage};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),

    /// Rejected by the argument parser; the message already carries usage.
    #[error("{0}")]
    Parse(#[from] clap::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse(_) => crate::exitcode::USAGE,
            CliError::App(e) => match e {
                ApplicationError::Domain(_) => crate::exitcode::USAGE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Crypto(_) => crate::exitcode::DATAERR,
                ApplicationError::OperationFailed { kind, .. } => match kind {
                    IoStage::Input => crate::exitcode::NOINPUT,
                    IoStage::Output => crate::exitcode::CANTCREAT,
                },
            },
        }
    }

    /// Whether the usage banner should follow the diagnostic line.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::App(ApplicationError::Domain(_)))
    }
}

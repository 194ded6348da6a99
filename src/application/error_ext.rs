//! Error conversion helpers for I/O operations
//!
//! Provides an extension trait for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult, IoStage};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read(&cert_path)
    ///     .with_path_context("read certificate", &cert_path, IoStage::Input)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path, stage: IoStage) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path, stage: IoStage) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            kind: stage,
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_message_names_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        let err = result
            .with_path_context("read private key", Path::new("/keys/site.key"), IoStage::Input)
            .unwrap_err();

        assert_eq!(err.to_string(), "read private key: /keys/site.key: denied");
        assert!(matches!(
            err,
            ApplicationError::OperationFailed {
                kind: IoStage::Input,
                ..
            }
        ));
    }
}

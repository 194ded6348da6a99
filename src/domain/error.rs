//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent invocation validation failures.
/// Every variant is a usage problem the caller can fix by changing arguments.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("private key is not defined (--privkey)")]
    PrivateKeyNotDefined,

    #[error("private key not found (--privkey). Path = {}", .0.display())]
    PrivateKeyNotFound(PathBuf),

    #[error("certificate is not defined (--cert)")]
    CertificateNotDefined,

    #[error("certificate not found (--cert). Path = {}", .0.display())]
    CertificateNotFound(PathBuf),

    #[error("folder given for output (--output) does not exist. Path = {}", .0.display())]
    OutputDirNotFound(PathBuf),

    #[error(
        "PFX already exists and clobber (--clobber) not specified. Pfx path = {}",
        .0.display()
    )]
    OutputExists(PathBuf),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

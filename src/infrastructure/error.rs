//! Infrastructure-level errors (crypto library failures)

use openssl::error::ErrorStack;
use thiserror::Error;

/// Failures reported by the PKCS#12 encoder.
///
/// Each variant names the stage that failed and carries the library's error stack.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("cannot load certificate: {0}")]
    Certificate(#[source] ErrorStack),

    #[error("cannot load private key: {0}")]
    PrivateKey(#[source] ErrorStack),

    #[error("cannot assemble PKCS#12 container: {0}")]
    Assemble(#[source] ErrorStack),

    #[error("cannot serialize PKCS#12 container: {0}")]
    Encode(#[source] ErrorStack),
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

//! I/O boundary traits for testability
//!
//! These traits abstract the filesystem and the crypto library, allowing the
//! service to be tested with mock implementations.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::infrastructure::InfraResult;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read the whole file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Check if path is a regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create or truncate the file and write `content`.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

    /// Create the file exclusively and write `content`.
    ///
    /// Fails with `ErrorKind::AlreadyExists` if anything exists at `path`.
    fn write_new(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// PKCS#12 assembly abstraction.
pub trait Pkcs12Encoder: Send + Sync {
    /// Bind a PEM private key and a PEM certificate into a DER-encoded
    /// PKCS#12 archive protected by `password`.
    fn encode(&self, privkey_pem: &[u8], cert_pem: &[u8], password: &str) -> InfraResult<Vec<u8>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(content)
    }
}

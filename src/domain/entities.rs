//! Domain entities: invocation request, validated configuration, outcome

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

/// Extension of PEM certificate files, replaced when deriving the output path.
pub const PEM_EXTENSION: &str = ".pem";

/// Extension of the generated PKCS#12 archive.
pub const PFX_EXTENSION: &str = ".pfx";

/// Password protecting the PKCS#12 container.
///
/// The secret is wiped from memory on drop and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Zeroizing::new(secret.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Unvalidated request as it comes from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PfxRequest {
    pub privkey: Option<PathBuf>,
    pub cert: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub clobber: bool,
    pub dry_run: bool,
}

/// Validated configuration for a single invocation.
///
/// Built once by `PfxService::resolve` and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    pub privkey_path: PathBuf,
    pub cert_path: PathBuf,
    pub output_path: PathBuf,
    pub clobber: bool,
    pub dry_run: bool,
    pub password: Password,
}

/// Result of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PfxOutcome {
    /// Archive assembled but not written.
    DryRun { path: PathBuf, size: usize },
    /// Archive written to `path`.
    Written { path: PathBuf, size: usize },
}

impl PfxOutcome {
    pub fn path(&self) -> &Path {
        match self {
            PfxOutcome::DryRun { path, .. } | PfxOutcome::Written { path, .. } => path,
        }
    }
}

/// Derive the archive path from the certificate path.
///
/// Keeps the certificate's directory and replaces the first `.pem` found in
/// the file name with `.pfx`. A name without `.pem` is kept unchanged, so the
/// output then collides with the certificate itself and the overwrite guard
/// rejects it unless clobbering.
///
/// The name is handled as raw bytes, so file names that are not valid UTF-8
/// are rewritten the same way.
pub fn default_output_path(cert: &Path) -> PathBuf {
    let Some(file_name) = cert.file_name() else {
        return cert.to_path_buf();
    };
    let file_name = PathBuf::from(replace_first_pem(file_name));
    match cert.parent() {
        Some(dir) => dir.join(file_name),
        None => file_name,
    }
}

#[cfg(unix)]
fn replace_first_pem(name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = name.as_bytes();
    let pem = PEM_EXTENSION.as_bytes();
    match bytes.windows(pem.len()).position(|w| w == pem) {
        Some(at) => {
            let mut renamed = Vec::with_capacity(bytes.len());
            renamed.extend_from_slice(&bytes[..at]);
            renamed.extend_from_slice(PFX_EXTENSION.as_bytes());
            renamed.extend_from_slice(&bytes[at + pem.len()..]);
            OsString::from_vec(renamed)
        }
        None => name.to_os_string(),
    }
}

#[cfg(not(unix))]
fn replace_first_pem(name: &OsStr) -> OsString {
    match name.to_str() {
        Some(s) => OsString::from(s.replacen(PEM_EXTENSION, PFX_EXTENSION, 1)),
        None => name.to_os_string(),
    }
}

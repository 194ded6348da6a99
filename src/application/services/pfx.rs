//! PFX generation service
//!
//! Runs one invocation through its stages:
//! validate inputs, resolve the output path, guard against overwrites,
//! assemble the PKCS#12 archive, then write it (or report it for a dry run).
//! Every check that can fail runs before the encoder is called, and nothing
//! is written unless all previous stages succeeded.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt, IoStage};
use crate::domain::{
    default_output_path, DomainError, DomainResult, InvocationConfig, Password, PfxOutcome,
    PfxRequest,
};
use crate::infrastructure::traits::{FileSystem, Pkcs12Encoder};

/// PKCS#12 generation service.
pub struct PfxService {
    fs: Arc<dyn FileSystem>,
    encoder: Arc<dyn Pkcs12Encoder>,
}

impl PfxService {
    /// Create a new PFX service.
    pub fn new(fs: Arc<dyn FileSystem>, encoder: Arc<dyn Pkcs12Encoder>) -> Self {
        Self { fs, encoder }
    }

    /// Validate a request and build the invocation configuration.
    ///
    /// Checks, in order: private key path, certificate path, output directory,
    /// existing output without clobber. No file is opened.
    #[instrument(level = "debug", skip(self, password))]
    pub fn resolve(
        &self,
        request: &PfxRequest,
        password: Password,
    ) -> ApplicationResult<InvocationConfig> {
        let privkey_path = self.require_file(
            request.privkey.as_deref(),
            DomainError::PrivateKeyNotDefined,
            DomainError::PrivateKeyNotFound,
        )?;
        let cert_path = self.require_file(
            request.cert.as_deref(),
            DomainError::CertificateNotDefined,
            DomainError::CertificateNotFound,
        )?;

        let output_path = match request.output.as_deref() {
            None => default_output_path(&cert_path),
            Some(output) => self.check_output_dir(output)?,
        };
        debug!("resolved output path: {}", output_path.display());

        if !request.clobber && self.fs.is_file(&output_path) {
            return Err(DomainError::OutputExists(output_path).into());
        }

        Ok(InvocationConfig {
            privkey_path,
            cert_path,
            output_path,
            clobber: request.clobber,
            dry_run: request.dry_run,
            password,
        })
    }

    /// Read both PEM inputs and assemble the PKCS#12 archive.
    #[instrument(level = "debug", skip_all, fields(cert = %config.cert_path.display()))]
    pub fn assemble(&self, config: &InvocationConfig) -> ApplicationResult<Vec<u8>> {
        let cert_pem = self
            .fs
            .read(&config.cert_path)
            .with_path_context("read certificate", &config.cert_path, IoStage::Input)?;
        let privkey_pem = self
            .fs
            .read(&config.privkey_path)
            .with_path_context("read private key", &config.privkey_path, IoStage::Input)?;

        let blob = self
            .encoder
            .encode(&privkey_pem, &cert_pem, config.password.expose())?;
        debug!("assembled PKCS#12 archive: {} bytes", blob.len());
        Ok(blob)
    }

    /// Write the archive, or only report its path for a dry run.
    ///
    /// Without clobber the file is created exclusively, so an output that
    /// appeared after `resolve` is still never overwritten.
    #[instrument(level = "debug", skip_all, fields(output = %config.output_path.display()))]
    pub fn emit(&self, config: &InvocationConfig, blob: &[u8]) -> ApplicationResult<PfxOutcome> {
        let path = config.output_path.clone();
        if config.dry_run {
            debug!("dry run, skipping write");
            return Ok(PfxOutcome::DryRun {
                path,
                size: blob.len(),
            });
        }

        let written = if config.clobber {
            self.fs.write(&path, blob)
        } else {
            self.fs.write_new(&path, blob)
        };
        match written {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(DomainError::OutputExists(path).into())
            }
            other => {
                other.with_path_context("write pfx", &path, IoStage::Output)?;
                Ok(PfxOutcome::Written {
                    path,
                    size: blob.len(),
                })
            }
        }
    }

    /// Run the whole pipeline for one request.
    pub fn generate(&self, request: &PfxRequest, password: Password) -> ApplicationResult<PfxOutcome> {
        let config = self.resolve(request, password)?;
        let blob = self.assemble(&config)?;
        self.emit(&config, &blob)
    }

    fn require_file(
        &self,
        path: Option<&Path>,
        undefined: DomainError,
        not_found: fn(PathBuf) -> DomainError,
    ) -> DomainResult<PathBuf> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(undefined),
        };
        if !self.fs.is_file(path) {
            return Err(not_found(path.to_path_buf()));
        }
        Ok(path.to_path_buf())
    }

    fn check_output_dir(&self, output: &Path) -> DomainResult<PathBuf> {
        if output.as_os_str().is_empty() {
            return Err(DomainError::OutputDirNotFound(output.to_path_buf()));
        }
        // a bare file name lives in the working directory
        let dir = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !self.fs.is_dir(dir) {
            return Err(DomainError::OutputDirNotFound(output.to_path_buf()));
        }
        Ok(output.to_path_buf())
    }
}

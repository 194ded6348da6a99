//! Service container for dependency injection
//!
//! Wires up the PFX service with its dependencies.

use std::sync::Arc;

use crate::application::services::PfxService;
use crate::config::Settings;
use crate::infrastructure::pkcs12::OpensslEncoder;
use crate::infrastructure::traits::{FileSystem, Pkcs12Encoder, RealFileSystem};

/// Container holding the application services for one invocation.
pub struct ServiceContainer {
    /// Environment-sourced settings
    pub settings: Arc<Settings>,

    pub pfx_service: PfxService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(OpensslEncoder))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        encoder: Arc<dyn Pkcs12Encoder>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            pfx_service: PfxService::new(fs, encoder),
        }
    }
}

//! pfxgen: bundle a PEM private key and certificate into a password-protected
//! PKCS#12 (PFX) archive.
//!
//! Layers, innermost first:
//! - [`domain`]: invocation entities and validation errors
//! - [`application`]: the PFX service orchestrating validation, assembly and output
//! - [`infrastructure`]: filesystem and OpenSSL adapters behind traits, DI container
//! - [`cli`]: clap arguments, command dispatch, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

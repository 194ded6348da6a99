//! Environment-sourced configuration
//!
//! The archive password is only ever read from `PKCS_PASSWORD`, so it stays out
//! of process listings and shell history.

use std::ffi::OsString;

use crate::application::ApplicationError;
use crate::domain::Password;

/// Environment variable holding the PKCS#12 password.
pub const PASSWORD_ENV_VAR: &str = "PKCS_PASSWORD";

/// Configuration read from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Raw password variable, `None` when unset
    password: Option<OsString>,
}

impl Settings {
    /// Read settings from the real process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self {
            password: lookup(PASSWORD_ENV_VAR),
        }
    }

    /// Settings with the given password set.
    pub fn with_password(password: impl Into<OsString>) -> Self {
        Self {
            password: Some(password.into()),
        }
    }

    /// The archive password.
    ///
    /// An empty value is accepted; only an unset or non-UTF-8 variable is an error.
    pub fn password(&self) -> Result<Password, ApplicationError> {
        let raw = self.password.as_ref().ok_or_else(|| ApplicationError::Config {
            message: format!(
                "missing PKCS password in {} environment variable",
                PASSWORD_ENV_VAR
            ),
        })?;
        let secret = raw.to_str().ok_or_else(|| ApplicationError::Config {
            message: format!("{} is not valid UTF-8", PASSWORD_ENV_VAR),
        })?;
        Ok(Password::new(secret))
    }
}

//! Domain layer: entities and validation errors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no crypto).

pub mod entities;
pub mod error;

pub use entities::*;
pub use error::{DomainError, DomainResult};

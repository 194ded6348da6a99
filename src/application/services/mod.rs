//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Pkcs12Encoder)
//! but are themselves concrete structs, not traits.

mod pfx;

pub use pfx::PfxService;

//! Process exit codes
//!
//! Validation and configuration problems share the conventional usage code 2;
//! the remaining failures use BSD sysexits.h values.

/// Successful termination (including help and dry run)
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 2;

/// Required environment configuration missing
pub const CONFIG: i32 = 2;

/// Data format error (key or certificate rejected by the crypto library)
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Can't create output file
pub const CANTCREAT: i32 = 73;

//! Stable exit codes for seqkit CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, I/O, or selection errors.
pub const INVALID: i32 = 1;
/// `seqkit draw` returned the fallback for every draw (total weight is zero).
pub const FALLBACK: i32 = 2;

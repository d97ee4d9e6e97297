//! Stable exit codes for roster CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: unknown id, rejected input, or unreadable config.
pub const INVALID: i32 = 1;

//! Stable exit codes for collector CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, invalid config, or a storage failure.
pub const INVALID: i32 = 1;
/// `collector add-review` referenced a customer id that does not exist.
pub const NOT_FOUND: i32 = 2;

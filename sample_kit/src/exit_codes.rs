//! Stable exit codes for `sample-kit` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid input, invalid config, or a failed precondition (empty pop, zero denominator, ...).
pub const INVALID: i32 = 1;
/// `sample-kit cancel` evaluated the rule and the candidate may not cancel.
pub const DENIED: i32 = 2;

//! Small, independent utility components and the `sample-kit` CLI around them.
//!
//! - **[`core`]**: Pure, deterministic components (stack, HTML formatting,
//!   arithmetic, reservation authorization). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (configuration on disk).
//!
//! [`commands`] coordinates core logic with configuration to implement CLI
//! subcommands.

pub mod commands;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

//! Side-effecting helpers kept out of `core`.

pub mod config;

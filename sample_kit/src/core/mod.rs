//! Deterministic, pure logic behind every `sample-kit` command.
//!
//! Core modules are independent of each other and free of I/O side effects,
//! including logging. Precondition failures are returned as typed errors whose
//! `Display` text is part of the public contract.

pub mod html;
pub mod math;
pub mod reservation;
pub mod stack;

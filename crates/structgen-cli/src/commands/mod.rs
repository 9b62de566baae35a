//! Command implementations for the structgen CLI.
//!
//! Each command resolves its inputs, runs the operation, and prints the
//! result according to the requested output format. Errors returned from a
//! command are I/O or configuration failures; a failed conversion is a
//! normal result with its own exit code.

pub mod generate;
pub mod hello;

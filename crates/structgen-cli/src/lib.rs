//! structgen CLI library.
//!
//! Exposes the command implementations, configuration loading and output
//! formatting behind the `structgen` binary so they can be tested.

pub mod commands;
pub mod config;
pub mod formatters;

//! Core types and errors for struct code generation.
//!
//! This crate provides the foundational types shared by the generator and
//! its hosts.
//!
//! # Architecture
//!
//! The core consists of:
//! - Error hierarchy with one variant per pipeline stage
//! - Generator options
//! - CLI output and exit-code types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;

pub mod cli;

pub use config::{GeneratorOptions, is_identifier};
pub use error::{Error, Result};

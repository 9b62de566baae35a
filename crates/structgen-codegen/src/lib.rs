//! Code generation for Go struct types.
//!
//! Parses Go source, then regenerates every struct with a `json` tag on
//! each exported field and a `String()` method listing its fields, using
//! Handlebars templates.
//!
//! # Architecture
//!
//! - [`syntax`] - tree-sitter parsing and syntax diagnostics
//! - [`analyzer`] - struct and field extraction
//! - [`tag`] - snake_case tag derivation
//! - [`template_engine`] / [`generator`] - rendering
//! - [`formatter`] - canonical layout of the rendered text
//! - [`entry`] - one-shot entry points for hosts

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod analyzer;
pub mod entry;
pub mod formatter;
pub mod generator;
pub mod syntax;
pub mod tag;
pub mod template_engine;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use analyzer::analyze;
pub use entry::{ConversionResult, convert, generate_code, hello_world};
pub use formatter::format_source;
pub use generator::CodeGenerator;
pub use tag::derive_tag;
pub use types::{Analysis, FieldDescriptor, StructDescriptor};

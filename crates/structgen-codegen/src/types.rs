//! Types for struct code generation.
//!
//! The analyzer produces an [`Analysis`]; the generator wraps it in a
//! [`TemplateContext`] together with the configured names and hands that to
//! the template engine.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::{Analysis, FieldDescriptor, StructDescriptor};
//!
//! let analysis = Analysis {
//!     package_name: "models".to_string(),
//!     structs: vec![StructDescriptor {
//!         name: "User".to_string(),
//!         fields: vec![FieldDescriptor {
//!             name: "ID".to_string(),
//!             type_text: "int".to_string(),
//!             tag: "i_d".to_string(),
//!         }],
//!     }],
//! };
//!
//! assert_eq!(analysis.field_count(), 1);
//! ```

use serde::Serialize;
use structgen_core::GeneratorOptions;

/// One field of a struct declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field identifier (first name of a multi-name declaration)
    pub name: String,
    /// Exact source text of the field's type expression
    pub type_text: String,
    /// Derived annotation value, empty when no annotation is emitted
    pub tag: String,
}

/// One struct type found in the source, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructDescriptor {
    /// Type name
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

/// Everything the renderer needs from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Declared package name
    pub package_name: String,
    /// Struct types in source order
    pub structs: Vec<StructDescriptor>,
}

impl Analysis {
    /// Returns the total number of fields across all structs.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.structs.iter().map(|s| s.fields.len()).sum()
    }
}

/// Context passed to the `structs` template.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    /// Package clause name
    pub package_name: &'a str,
    /// Annotation key, e.g. `json`
    pub tag_key: &'a str,
    /// Receiver identifier of the generated method
    pub receiver: &'a str,
    /// Generated method name
    pub method_name: &'a str,
    /// Structs to render
    pub structs: &'a [StructDescriptor],
}

impl<'a> TemplateContext<'a> {
    /// Builds the context for one analysis.
    #[must_use]
    pub fn new(analysis: &'a Analysis, options: &'a GeneratorOptions) -> Self {
        Self {
            package_name: &analysis.package_name,
            tag_key: &options.tag_key,
            receiver: &options.receiver,
            method_name: &options.method_name,
            structs: &analysis.structs,
        }
    }
}

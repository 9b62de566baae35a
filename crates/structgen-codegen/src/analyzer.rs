//! Struct extraction from Go source.
//!
//! Walks every declaration in a parsed file, including those nested in
//! function bodies, and collects each struct type with its fields. Field
//! types are copied byte-for-byte from the input so generics, pointers and
//! qualified names come through exactly as written.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::analyzer::analyze;
//!
//! let analysis = analyze(b"package p\ntype User struct {\nID int\nName string\n}").unwrap();
//! assert_eq!(analysis.package_name, "p");
//! assert_eq!(analysis.structs[0].fields[0].tag, "i_d");
//! ```

use crate::syntax::ProgramUnit;
use crate::tag::{derive_tag, is_exported};
use crate::types::{Analysis, FieldDescriptor, StructDescriptor};
use structgen_core::{Error, Result};
use tree_sitter::Node;

/// How the walk treats a node.
enum DeclarationKind<'tree> {
    /// `type Name struct {...}`: extract, nothing further inside.
    Struct {
        name: Node<'tree>,
        body: Node<'tree>,
    },
    /// Any other type spec: skipped with its subtree.
    OtherType,
    /// Everything else: descend.
    Other,
}

impl<'tree> DeclarationKind<'tree> {
    fn classify(node: Node<'tree>) -> Self {
        if !matches!(node.kind(), "type_spec" | "type_alias") {
            return Self::Other;
        }

        match (node.child_by_field_name("name"), node.child_by_field_name("type")) {
            (Some(name), Some(body)) if body.kind() == "struct_type" => Self::Struct { name, body },
            _ => Self::OtherType,
        }
    }
}

/// Extracts the package name and every struct type from Go source bytes.
///
/// # Errors
///
/// Returns [`Error::SyntaxError`] if the input is not valid UTF-8 or not a
/// syntactically valid Go file. No partial result is produced.
pub fn analyze(source: &[u8]) -> Result<Analysis> {
    let text = std::str::from_utf8(source).map_err(|e| {
        let (line, column) = position_of(source, e.valid_up_to());
        Error::SyntaxError {
            message: format!("{line}:{column}: illegal UTF-8 encoding"),
        }
    })?;

    let unit = ProgramUnit::parse(text).map_err(|d| Error::SyntaxError {
        message: d.to_string(),
    })?;

    let mut structs = Vec::new();
    visit(&unit, unit.root(), &mut structs)?;

    tracing::debug!(
        package = unit.package_name(),
        structs = structs.len(),
        "Analyzed source"
    );

    Ok(Analysis {
        package_name: unit.package_name().to_string(),
        structs,
    })
}

fn visit(unit: &ProgramUnit<'_>, node: Node<'_>, out: &mut Vec<StructDescriptor>) -> Result<()> {
    match DeclarationKind::classify(node) {
        DeclarationKind::Struct { name, body } => {
            out.push(extract_struct(unit, name, body)?);
            return Ok(());
        }
        DeclarationKind::OtherType => return Ok(()),
        DeclarationKind::Other => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        visit(unit, child, out)?;
    }
    Ok(())
}

fn extract_struct(
    unit: &ProgramUnit<'_>,
    name: Node<'_>,
    body: Node<'_>,
) -> Result<StructDescriptor> {
    let struct_name = unit.text(name);
    let mut fields = Vec::new();

    let mut cursor = body.walk();
    let lists: Vec<Node<'_>> = body
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "field_declaration_list")
        .collect();

    for list in lists {
        let mut list_cursor = list.walk();
        let declarations: Vec<Node<'_>> = list
            .named_children(&mut list_cursor)
            .filter(|n| n.kind() == "field_declaration")
            .collect();

        for declaration in declarations {
            if let Some(field) = extract_field(unit, struct_name, declaration)? {
                fields.push(field);
            }
        }
    }

    Ok(StructDescriptor {
        name: struct_name.to_string(),
        fields,
    })
}

fn extract_field(
    unit: &ProgramUnit<'_>,
    struct_name: &str,
    declaration: Node<'_>,
) -> Result<Option<FieldDescriptor>> {
    let mut cursor = declaration.walk();
    let names: Vec<&str> = declaration
        .children_by_field_name("name", &mut cursor)
        .map(|n| unit.text(n))
        .collect();

    let Some(&name) = names.first() else {
        tracing::debug!(
            struct_name,
            field = unit.text(declaration),
            "Skipping embedded field"
        );
        return Ok(None);
    };

    if names.len() > 1 {
        tracing::debug!(
            struct_name,
            kept = name,
            dropped = names.len() - 1,
            "Multi-name field declaration, keeping first name only"
        );
    }

    let type_node = declaration.child_by_field_name("type").ok_or_else(|| {
        let position = declaration.start_position();
        Error::SyntaxError {
            message: format!(
                "{}:{}: expected field type",
                position.row + 1,
                position.column + 1
            ),
        }
    })?;

    let tag = if is_exported(name) {
        derive_tag(name)
    } else {
        String::new()
    };

    Ok(Some(FieldDescriptor {
        name: name.to_string(),
        type_text: unit.text(type_node).to_string(),
        tag,
    }))
}

/// Converts a byte offset into a 1-based line and byte column.
fn position_of(source: &[u8], offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    (line, before.len() - line_start + 1)
}

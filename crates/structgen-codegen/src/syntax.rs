//! Go source parsing.
//!
//! Wraps `tree-sitter-go` and turns its error-tolerant trees into a strict
//! accept/reject decision: any `ERROR` or `MISSING` node, a missing package
//! clause or a top-level statement rejects the unit with a [`Diagnostic`]
//! pointing at the first offending token.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::syntax::ProgramUnit;
//!
//! let unit = ProgramUnit::parse("package shapes\n\ntype Point struct{ X int }\n").unwrap();
//! assert_eq!(unit.package_name(), "shapes");
//!
//! let err = ProgramUnit::parse("package shapes\n\ntype Point struct {\n").unwrap_err();
//! assert_eq!(err.line, 3);
//! ```

use std::fmt;
use tree_sitter::{Node, Parser, Tree};

/// Top-level node kinds Go accepts after the package clause.
const TOP_LEVEL_DECLARATIONS: &[&str] = &[
    "import_declaration",
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "const_declaration",
    "var_declaration",
    "comment",
];

/// First syntax problem found in a source text.
///
/// Positions are 1-based; the column counts bytes, as Go tooling does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// 1-based byte column
    pub column: usize,
    /// What the parser expected or found
    pub message: String,
}

impl Diagnostic {
    fn at(node: Node<'_>, message: String) -> Self {
        let position = node.start_position();
        Self {
            line: position.row + 1,
            column: position.column + 1,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

impl std::error::Error for Diagnostic {}

/// One parsed source file.
///
/// Borrows the source text it was parsed from; byte offsets of every node
/// index into that text.
pub struct ProgramUnit<'src> {
    source: &'src str,
    tree: Tree,
    package_name: &'src str,
}

impl fmt::Debug for ProgramUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgramUnit")
            .field("package_name", &self.package_name)
            .field("len", &self.source.len())
            .finish_non_exhaustive()
    }
}

impl<'src> ProgramUnit<'src> {
    /// Parses one Go source file.
    ///
    /// # Errors
    ///
    /// Returns the first [`Diagnostic`] if the text is not a syntactically
    /// valid Go file.
    pub fn parse(source: &'src str) -> Result<Self, Diagnostic> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| Diagnostic {
                line: 1,
                column: 1,
                message: format!("Go grammar unavailable: {e}"),
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| Diagnostic {
            line: 1,
            column: 1,
            message: "parse cancelled".to_string(),
        })?;

        let root = tree.root_node();
        if let Some(node) = first_error(source, root) {
            let message = if node.is_missing() {
                format!("expected '{}'", node.kind())
            } else {
                format!("unexpected {}", leading_token(text_of(source, node)))
            };
            return Err(Diagnostic::at(node, message));
        }

        let package_name = package_clause(source, root)?;

        Ok(Self {
            source,
            tree,
            package_name,
        })
    }

    /// Returns the declared package name.
    #[must_use]
    pub const fn package_name(&self) -> &'src str {
        self.package_name
    }

    /// Returns the text the unit was parsed from.
    #[must_use]
    pub const fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the root `source_file` node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns the exact source text spanned by `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &'src str {
        text_of(self.source, node)
    }
}

fn text_of<'src>(source: &'src str, node: Node<'_>) -> &'src str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or_default()
}

/// Finds the first `ERROR` or `MISSING` node in document order.
fn first_error<'tree>(source: &str, node: Node<'tree>) -> Option<Node<'tree>> {
    if node.is_missing() && is_final_terminator(source, node) {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find_map(|child| first_error(source, child));
    found
}

/// A statement terminator the grammar expects after the last declaration
/// of a file without a final newline. Go inserts it at EOF.
fn is_final_terminator(source: &str, node: Node<'_>) -> bool {
    matches!(node.kind(), "\n" | ";")
        && source
            .get(node.start_byte()..)
            .is_some_and(|rest| rest.trim().is_empty())
}

/// Checks the package clause and top-level declarations, returning the
/// package name.
fn package_clause<'src>(source: &'src str, root: Node<'_>) -> Result<&'src str, Diagnostic> {
    let mut cursor = root.walk();
    let mut declarations = root
        .named_children(&mut cursor)
        .filter(|node| node.kind() != "comment");

    let Some(clause) = declarations.next() else {
        return Err(Diagnostic {
            line: 1,
            column: 1,
            message: "expected 'package', found EOF".to_string(),
        });
    };

    if clause.kind() != "package_clause" {
        return Err(Diagnostic::at(
            clause,
            format!("expected 'package', found {}", leading_token(text_of(source, clause))),
        ));
    }

    let mut imports_allowed = true;
    let stray = declarations.find(|node| {
        let kind = node.kind();
        if kind == "import_declaration" {
            return !imports_allowed;
        }
        imports_allowed = false;
        !TOP_LEVEL_DECLARATIONS.contains(&kind)
    });
    if let Some(stray) = stray {
        return Err(Diagnostic::at(
            stray,
            format!(
                "expected declaration, found {}",
                leading_token(text_of(source, stray))
            ),
        ));
    }

    let mut clause_cursor = clause.walk();
    let name = clause
        .named_children(&mut clause_cursor)
        .find(|node| node.kind() == "package_identifier")
        .map(|node| text_of(source, node))
        .ok_or_else(|| Diagnostic::at(clause, "expected package name".to_string()))?;

    Ok(name)
}

/// Quotes the first whitespace-delimited token of `text`, or `EOF`.
fn leading_token(text: &str) -> String {
    let token: String = text
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .take(24)
        .collect();

    if token.is_empty() {
        "EOF".to_string()
    } else {
        format!("'{token}'")
    }
}

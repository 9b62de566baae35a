//! Canonical layout for generated Go source.
//!
//! Re-parses rendered text and lays it out the way `gofmt` would for the
//! declarations the generator emits:
//! - one tab of indentation per open brace or parenthesis
//! - no trailing whitespace, at most one consecutive blank line
//! - single-line struct fields aligned in name, type and tag columns
//!
//! Lines inside multi-line string literals and comments are copied as-is.
//! Spacing within other lines is kept.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::formatter::format_source;
//!
//! let formatted = format_source("package p\ntype T struct {\n  A int\n  Long string\n}\n").unwrap();
//! assert_eq!(formatted, "package p\ntype T struct {\n\tA    int\n\tLong string\n}\n");
//! ```

use crate::syntax::ProgramUnit;
use std::collections::HashMap;
use std::ops::Range;
use structgen_core::{Error, Result};
use tree_sitter::Node;

/// Formats Go source text.
///
/// # Errors
///
/// Returns [`Error::FormatError`] with the parser diagnostic if `source` is
/// not syntactically valid Go.
pub fn format_source(source: &str) -> Result<String> {
    let unit = ProgramUnit::parse(source).map_err(|d| Error::FormatError {
        message: d.to_string(),
    })?;

    let mut layout = Layout::default();
    layout.collect(&unit, unit.root());

    let entries = layout.entries(source);
    Ok(render(&entries))
}

/// A single-line field declaration, split into columns.
#[derive(Debug)]
struct FieldRow {
    /// Id of the enclosing `field_declaration_list`
    list: usize,
    /// Exact text of the declaration
    text: String,
    names: String,
    type_text: String,
    tag: Option<String>,
}

#[derive(Debug)]
enum Entry {
    Blank,
    Verbatim(String),
    Code { depth: usize, text: String },
    Field { depth: usize, row: usize },
}

#[derive(Debug, Default)]
struct Layout {
    /// Opening (+1) and closing (-1) brackets in source order
    brackets: Vec<(usize, i32)>,
    /// Byte ranges inside multi-line literals and comments
    verbatim: Vec<Range<usize>>,
    /// Field rows keyed by 0-based line number
    fields: HashMap<usize, FieldRow>,
}

impl Layout {
    fn collect(&mut self, unit: &ProgramUnit<'_>, node: Node<'_>) {
        match node.kind() {
            "{" | "(" if !node.is_named() => self.brackets.push((node.start_byte(), 1)),
            "}" | ")" if !node.is_named() => self.brackets.push((node.start_byte(), -1)),
            "raw_string_literal" | "interpreted_string_literal" | "comment" => {
                if node.start_position().row != node.end_position().row {
                    self.verbatim.push(node.start_byte() + 1..node.end_byte());
                }
                return;
            }
            "field_declaration" => self.record_field(unit, node),
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect(unit, child);
        }
    }

    fn record_field(&mut self, unit: &ProgramUnit<'_>, node: Node<'_>) {
        let row = node.start_position().row;
        if row != node.end_position().row {
            return;
        }
        let Some(list) = node.parent().filter(|p| p.kind() == "field_declaration_list") else {
            return;
        };
        let Some(type_node) = node.child_by_field_name("type") else {
            return;
        };

        let mut cursor = node.walk();
        let names: Vec<&str> = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| unit.text(n))
            .collect();
        if names.is_empty() {
            return;
        }

        self.fields.insert(
            row,
            FieldRow {
                list: list.id(),
                text: unit.text(node).to_string(),
                names: names.join(", "),
                type_text: unit.text(type_node).to_string(),
                tag: node
                    .child_by_field_name("tag")
                    .map(|t| unit.text(t).to_string()),
            },
        );
    }

    fn in_verbatim(&self, offset: usize) -> bool {
        self.verbatim.iter().any(|r| r.contains(&offset))
    }

    /// Bracket depth of the line whose first token starts at `offset`.
    fn depth_at(&self, offset: usize) -> usize {
        let idx = self.brackets.partition_point(|&(at, _)| at < offset);
        let mut depth: i32 = self.brackets[..idx].iter().map(|&(_, delta)| delta).sum();
        if self
            .brackets
            .get(idx)
            .is_some_and(|&(at, delta)| at == offset && delta < 0)
        {
            depth -= 1;
        }
        usize::try_from(depth).unwrap_or(0)
    }

    fn entries(&self, source: &str) -> Vec<Entry> {
        let mut entries = Vec::new();
        let mut start = 0;

        for (row, raw) in source.split('\n').enumerate() {
            let end = start + raw.len();
            let keep_tail = self.in_verbatim(end);

            if self.in_verbatim(start) {
                let line = if keep_tail { raw } else { raw.trim_end() };
                entries.push(Entry::Verbatim(line.to_string()));
            } else {
                let trimmed = raw.trim_start();
                let text = if keep_tail { trimmed } else { trimmed.trim_end() };

                if text.is_empty() {
                    entries.push(Entry::Blank);
                } else {
                    let depth = self.depth_at(start + raw.len() - trimmed.len());
                    let is_field = self.fields.get(&row).is_some_and(|f| f.text == text);
                    entries.push(if is_field {
                        Entry::Field { depth, row }
                    } else {
                        Entry::Code {
                            depth,
                            text: text.to_string(),
                        }
                    });
                }
            }

            start = end + 1;
        }

        self.align(entries)
    }

    /// Replaces field entries with aligned code lines.
    fn align(&self, entries: Vec<Entry>) -> Vec<Entry> {
        let mut out = Vec::with_capacity(entries.len());
        let mut section: Vec<(usize, &FieldRow)> = Vec::new();

        for entry in entries {
            if let Entry::Field { depth, row } = entry {
                let field = &self.fields[&row];
                if section.last().is_some_and(|(_, prev)| prev.list != field.list) {
                    out.extend(align_section(&section));
                    section.clear();
                }
                section.push((depth, field));
            } else {
                out.extend(align_section(&section));
                section.clear();
                out.push(entry);
            }
        }
        out.extend(align_section(&section));
        out
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, to: usize) -> String {
    format!("{text}{}", " ".repeat(to.saturating_sub(width(text)) + 1))
}

/// Aligns one run of consecutive fields from the same struct.
///
/// Names align across the whole run; types align across consecutive
/// tagged rows only.
fn align_section(section: &[(usize, &FieldRow)]) -> Vec<Entry> {
    let name_width = section
        .iter()
        .map(|(_, f)| width(&f.names))
        .max()
        .unwrap_or(0);

    let mut type_widths = vec![0; section.len()];
    let mut run_start = 0;
    while run_start < section.len() {
        if section[run_start].1.tag.is_none() {
            run_start += 1;
            continue;
        }
        let run_end = section[run_start..]
            .iter()
            .position(|(_, f)| f.tag.is_none())
            .map_or(section.len(), |n| run_start + n);
        let run_width = section[run_start..run_end]
            .iter()
            .map(|(_, f)| width(&f.type_text))
            .max()
            .unwrap_or(0);
        type_widths[run_start..run_end].fill(run_width);
        run_start = run_end;
    }

    section
        .iter()
        .zip(type_widths)
        .map(|(&(depth, field), type_width)| {
            let mut text = pad(&field.names, name_width);
            match &field.tag {
                Some(tag) => {
                    text.push_str(&pad(&field.type_text, type_width));
                    text.push_str(tag);
                }
                None => text.push_str(&field.type_text),
            }
            Entry::Code { depth, text }
        })
        .collect()
}

fn render(entries: &[Entry]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(entries.len());
    let mut last_blank = true;

    for entry in entries {
        match entry {
            Entry::Blank => {
                if !last_blank {
                    lines.push(String::new());
                }
                last_blank = true;
                continue;
            }
            Entry::Verbatim(text) => lines.push(text.clone()),
            Entry::Code { depth, text } => lines.push(format!("{}{text}", "\t".repeat(*depth))),
            Entry::Field { .. } => {}
        }
        last_blank = false;
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    let mut formatted = lines.join("\n");
    formatted.push('\n');
    formatted
}

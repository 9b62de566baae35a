//! Property-based tests for tag derivation and generation robustness.

use proptest::prelude::*;
use structgen_codegen::generate_code;
use structgen_codegen::tag::{derive_tag, is_exported};

fn exported_identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,20}"
}

fn unexported_identifier() -> impl Strategy<Value = String> {
    "[a-z0-9_][A-Za-z0-9_]{0,20}"
}

fn field_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "int",
        "string",
        "*Node",
        "[]byte",
        "map[string]int",
        "chan<- error",
        "func() bool",
    ])
}

fn struct_fields() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    prop::collection::vec((exported_identifier(), field_type()), 0..8)
}

proptest! {
    /// Exported identifiers never keep an uppercase ASCII letter
    #[test]
    fn prop_tag_is_lowercase(name in exported_identifier()) {
        let tag = derive_tag(&name);
        prop_assert!(!tag.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Every uppercase letter but the first adds one underscore
    #[test]
    fn prop_tag_underscore_count(name in exported_identifier()) {
        let tag = derive_tag(&name);
        let uppercase = name.chars().filter(char::is_ascii_uppercase).count();
        let underscores = name.chars().filter(|&c| c == '_').count();

        prop_assert_eq!(
            tag.chars().filter(|&c| c == '_').count(),
            underscores + uppercase - 1
        );
    }

    /// Removing underscores and case recovers the identifier
    #[test]
    fn prop_tag_preserves_letters(name in exported_identifier()) {
        let strip = |s: &str| s.replace('_', "").to_ascii_lowercase();
        prop_assert_eq!(strip(&derive_tag(&name)), strip(&name));
    }

    #[test]
    fn prop_unexported_unchanged(name in unexported_identifier()) {
        prop_assert!(!is_exported(&name));
        prop_assert_eq!(derive_tag(&name), name);
    }

    /// Every exported field of a generated struct carries its derived tag
    #[test]
    fn prop_generated_struct_tags_every_field(fields in struct_fields()) {
        let body: String = fields
            .iter()
            .map(|(name, ty)| format!("\t{name} {ty}\n"))
            .collect();
        let source = format!("package p\n\ntype Generated struct {{\n{body}}}\n");

        let output = generate_code(source.as_bytes());
        prop_assert!(output.starts_with("package p\n"), "{}", output);

        for (name, _) in &fields {
            let tag = format!("`json:\"{}\"`", derive_tag(name));
            prop_assert!(output.contains(&tag), "missing {} in {}", tag, output);
        }
    }

    /// Arbitrary text either generates or reports a syntax error
    #[test]
    fn prop_never_panics(source in "[ -~\t\n]{0,200}") {
        let output = generate_code(source.as_bytes());
        prop_assert!(
            output.starts_with("package ") || output.starts_with("Syntax error: "),
            "{}",
            output
        );
    }
}

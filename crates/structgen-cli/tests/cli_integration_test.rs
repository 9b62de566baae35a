//! Integration tests for the generate command workflow.

use std::fs;
use std::path::PathBuf;
use structgen_cli::commands::generate;
use structgen_core::cli::{ExitCode, OutputFormat};
use tempfile::TempDir;

const USER_SOURCE: &str = "package p\ntype User struct {\nID int\nName string\n}";

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Converts a file and writes the generated code to the output file.
#[test]
fn test_generate_file_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "user.go", USER_SOURCE);
    let output = dir.path().join("user_gen.go");

    let code = generate::run(Some(input), Some(output.clone()), None, OutputFormat::Text).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.starts_with("package p\n"));
    assert!(generated.contains("\tID   int    `json:\"i_d\"`\n"));
    assert!(generated.contains("\treturn \"ID: s.ID, Name: s.Name\"\n"));
}

/// A syntax error yields exit code 1 and no output file in text mode.
#[test]
fn test_generate_invalid_source_text_mode() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "broken.go", "package p\ntype User struct {\nID int\n");
    let output = dir.path().join("out.go");

    let code = generate::run(Some(input), Some(output.clone()), None, OutputFormat::Text).unwrap();

    assert_eq!(code, ExitCode::CONVERSION_FAILED);
    assert!(!output.exists());
}

/// JSON mode always writes an envelope with an explicit success flag.
#[test]
fn test_generate_json_envelope() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.go", USER_SOURCE);
    let bad = write_file(&dir, "bad.go", "type User struct {}");
    let good_out = dir.path().join("good.json");
    let bad_out = dir.path().join("bad.json");

    let code = generate::run(Some(good), Some(good_out.clone()), None, OutputFormat::Json).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&good_out).unwrap()).unwrap();
    assert_eq!(value["success"], true);
    assert!(value["output"].as_str().unwrap().contains("type User struct {"));
    assert!(value["error"].is_null());

    let code = generate::run(Some(bad), Some(bad_out.clone()), None, OutputFormat::Json).unwrap();
    assert_eq!(code, ExitCode::CONVERSION_FAILED);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&bad_out).unwrap()).unwrap();
    assert_eq!(value["success"], false);
    assert!(value["output"].is_null());
    assert_eq!(
        value["error"],
        "Syntax error: 1:1: expected 'package', found 'type'"
    );
}

/// Options from a config file change the generated annotation and method.
#[test]
fn test_generate_with_config() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "user.go", USER_SOURCE);
    let config = write_file(
        &dir,
        "structgen.toml",
        "[generator]\ntag_key = \"yaml\"\nreceiver = \"u\"\n",
    );
    let output = dir.path().join("out.go");

    let code = generate::run(
        Some(input),
        Some(output.clone()),
        Some(config),
        OutputFormat::Text,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("`yaml:\"name\"`"));
    assert!(generated.contains("func (u *User) String() string {"));
}

/// Invalid configuration is an error, not a conversion failure.
#[test]
fn test_generate_invalid_config() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "user.go", USER_SOURCE);
    let config = write_file(&dir, "structgen.toml", "[generator]\ntag_key = \"\"\n");

    let err = generate::run(Some(input), None, Some(config), OutputFormat::Text).unwrap_err();
    assert!(format!("{err:#}").contains("Configuration error"));
}

/// Missing input file is an error.
#[test]
fn test_generate_missing_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.go");

    let err = generate::run(Some(input), None, None, OutputFormat::Text).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

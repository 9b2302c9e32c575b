//! Command handlers driven with the same arguments the binary parses.

use clap::Parser;
use mockgen::commands::describe::describe_schema;
use mockgen::{run_generate, GenerateArgs};
use tempfile::TempDir;

fn generate_args(extra: &[&str]) -> GenerateArgs {
    let mut argv = vec!["generate", "--schema", "tests/fixtures/users.yaml"];
    argv.extend_from_slice(extra);
    GenerateArgs::parse_from(argv)
}

#[test]
fn test_generate_jsonl_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("users.jsonl");
    let output_arg = output.to_string_lossy().to_string();

    let args = generate_args(&[
        "--count",
        "4",
        "--seed",
        "3",
        "--format",
        "jsonl",
        "--output",
        output_arg.as_str(),
    ]);
    run_generate(&args)?;

    let content = std::fs::read_to_string(&output)?;
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 4);

    for line in lines {
        let user: serde_json::Value = serde_json::from_str(line)?;
        assert_eq!(user["source"], "fixture");
        assert!(user["profile"].is_string());
    }
    Ok(())
}

#[test]
fn test_generate_yaml_with_references() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("user.yaml");
    let output_arg = output.to_string_lossy().to_string();

    let args = generate_args(&["--handle-references", "--format", "yaml", "--output", output_arg.as_str()]);
    run_generate(&args)?;

    let user: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&output)?)?;
    assert!(user["profile"].is_mapping());
    assert!(user["profile"]["age"].is_i64());
    Ok(())
}

#[test]
fn test_generate_missing_schema_file() {
    let args = GenerateArgs::parse_from(["generate", "--schema", "tests/fixtures/missing.yaml"]);
    let err = run_generate(&args).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load schema document"));
}

#[test]
fn test_generate_cycle_reports_chain() {
    let args = GenerateArgs::parse_from(["generate", "--schema", "tests/fixtures/cycle.yaml"]);
    let err = run_generate(&args).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Broken"));
    assert!(message.contains("a -> b -> a"));
}

#[test]
fn test_describe_fixture() {
    let document = mock_core::SchemaDocument::from_file("tests/fixtures/users.yaml").unwrap();
    let mut buffer = Vec::new();
    describe_schema(&mut buffer, &document, "User").unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.starts_with("User\n"));
    assert!(text.contains("  status: scalar string {\"enum_values\":[\"active\",\"suspended\",\"deleted\"]}"));
    assert!(text.contains("  orders: document_array"));
    assert!(text.contains("    quantity: scalar number {\"min\":1,\"max\":5}"));
    assert!(text.contains("  profile: scalar objectid {\"reference\":\"Profile\"}"));
    assert!(text.contains("  metadata: mixed"));
    assert!(text.contains("  legacy: skipped"));
}

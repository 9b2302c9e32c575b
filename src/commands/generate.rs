//! Generate command handler.

use super::{load_document, root_name};
use crate::output::write_objects;
use crate::GenerateArgs;
use anyhow::Context;
use mock_core::{MockObject, SchemaDocument};
use mock_generator::{GenerationOptions, MockGenerator};
use std::fs::File;
use std::io::{self, BufWriter};

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let document = load_document(&args.schema_opts)?;
    let objects = generate_objects(&document, args)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path:?}"))?;
            write_objects(&mut BufWriter::new(file), &objects, args.format)?;
            tracing::info!("Wrote {} object(s) to {:?}", objects.len(), path);
        }
        None => write_objects(&mut io::stdout().lock(), &objects, args.format)?,
    }

    Ok(())
}

/// Generate `args.count` objects of the selected schema.
///
/// Options layer as defaults, then the document's `options:`, then flags.
pub fn generate_objects(
    document: &SchemaDocument,
    args: &GenerateArgs,
) -> anyhow::Result<Vec<MockObject>> {
    let root = root_name(document, &args.schema_opts)?;
    let overrides = document.options.merge(args.overrides());
    tracing::debug!(root = %root, ?overrides, "Effective option overrides");

    let options = GenerationOptions::from_document(document).with_overrides(&overrides);
    let mut generator = MockGenerator::new(options);

    (0..args.count)
        .map(|i| {
            generator
                .generate_named(&root)
                .with_context(|| format!("Failed to generate object {} of schema '{root}'", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mock_core::MockValue;

    const DOCUMENT: &str = r#"
root: User
options:
  array_length: 2
  seed: 11
fixed_values:
  status: active
schemas:
  User:
    username: { type: String, minLength: 4, maxLength: 8 }
    status: String
    tags: [String]
    profile: { type: ObjectId, ref: Profile }
  Profile:
    age: { type: Number, min: 18, max: 90 }
"#;

    fn args(extra: &[&str]) -> GenerateArgs {
        let mut argv = vec!["generate", "--schema", "unused.yaml"];
        argv.extend_from_slice(extra);
        GenerateArgs::parse_from(argv)
    }

    #[test]
    fn test_document_options_apply() {
        let document = SchemaDocument::from_yaml(DOCUMENT).unwrap();
        let objects = generate_objects(&document, &args(&[])).unwrap();

        assert_eq!(objects.len(), 1);
        let user = &objects[0];
        assert_eq!(user.get_str("status"), Some("active"));
        assert_eq!(user.get("tags").and_then(MockValue::as_array).unwrap().len(), 2);
        // References are off unless enabled
        assert!(user.get_str("profile").is_some());
    }

    #[test]
    fn test_flags_override_document() {
        let document = SchemaDocument::from_yaml(DOCUMENT).unwrap();
        let objects = generate_objects(
            &document,
            &args(&["--count", "3", "--array-length", "4", "--handle-references"]),
        )
        .unwrap();

        assert_eq!(objects.len(), 3);
        for user in &objects {
            assert_eq!(user.get("tags").and_then(MockValue::as_array).unwrap().len(), 4);
            assert!(user.get("profile").and_then(MockValue::as_object).is_some());
        }
    }

    #[test]
    fn test_flag_disables_document_references() {
        let yaml = DOCUMENT.replace("  seed: 11", "  seed: 11\n  handle_references: true");
        let document = SchemaDocument::from_yaml(&yaml).unwrap();

        let expanded = generate_objects(&document, &args(&[])).unwrap();
        assert!(expanded[0].get("profile").and_then(MockValue::as_object).is_some());

        let flat = generate_objects(&document, &args(&["--handle-references", "false"])).unwrap();
        assert_eq!(flat[0].get_str("profile").map(str::len), Some(24));
    }

    #[test]
    fn test_document_seed_is_reproducible() {
        let document = SchemaDocument::from_yaml(DOCUMENT).unwrap();
        let first = generate_objects(&document, &args(&["--count", "2"])).unwrap();
        let second = generate_objects(&document, &args(&["--count", "2"])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_root_flag() {
        let document = SchemaDocument::from_yaml(DOCUMENT).unwrap();
        let objects = generate_objects(&document, &args(&["--root", "Profile"])).unwrap();
        assert!(objects[0].contains_key("age"));

        let err = generate_objects(&document, &args(&["--root", "Ghost"])).unwrap_err();
        assert!(format!("{err:#}").contains("Ghost"));
    }
}

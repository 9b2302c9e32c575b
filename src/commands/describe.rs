//! Describe command handler.
//!
//! Prints every field of a schema in generation order together with the
//! descriptor the engine derives for it:
//!
//! ```text
//! User
//!   username: scalar string {"min_length":4,"max_length":8}
//!   email: scalar string
//!   address: nested_schema
//!     city: scalar string
//!   tags: array of scalar string
//!   legacy: skipped
//! ```

use super::{load_document, root_name};
use crate::DescribeArgs;
use anyhow::Context;
use mock_core::{DependencyMap, SchemaDocument, SchemaPathMap, ROOT_SCOPE};
use mock_generator::{describe, normalize_type_name, order, FieldDescriptor, FieldKind};
use std::io::{self, Write};

/// Run the describe command.
pub fn run_describe(args: &DescribeArgs) -> anyhow::Result<()> {
    let document = load_document(&args.schema_opts)?;
    let root = root_name(&document, &args.schema_opts)?;
    describe_schema(&mut io::stdout().lock(), &document, &root)
}

/// Write the description of schema `root` to `writer`.
pub fn describe_schema<W: Write>(
    writer: &mut W,
    document: &SchemaDocument,
    root: &str,
) -> anyhow::Result<()> {
    let paths = document.schema(root)?;
    writeln!(writer, "{root}")?;
    describe_scope(writer, paths, ROOT_SCOPE, &document.dependencies, 1)?;
    writer.flush()?;
    Ok(())
}

fn describe_scope<W: Write>(
    writer: &mut W,
    paths: &SchemaPathMap,
    scope_key: &str,
    dependencies: &DependencyMap,
    indent: usize,
) -> anyhow::Result<()> {
    let field_names = paths.field_names();
    let fields = order(scope_key, &field_names, dependencies)
        .with_context(|| format!("Failed to order fields of scope '{scope_key}'"))?;
    let pad = "  ".repeat(indent);

    for name in &fields {
        let Some(declaration) = paths.get(name) else {
            continue;
        };
        let Some(descriptor) = describe(name, declaration) else {
            writeln!(writer, "{pad}{name}: skipped")?;
            continue;
        };

        write!(writer, "{pad}{name}: {}", summary(&descriptor))?;
        if !descriptor.constraints.is_empty() {
            write!(writer, " {}", serde_json::to_string(&descriptor.constraints)?)?;
        }
        writeln!(writer)?;

        let nested = descriptor
            .nested_schema()
            .or_else(|| descriptor.element().and_then(FieldDescriptor::nested_schema));
        if let Some(nested) = nested {
            describe_scope(writer, nested, name, dependencies, indent + 1)?;
        }
    }
    Ok(())
}

fn summary(descriptor: &FieldDescriptor<'_>) -> String {
    let mut text = descriptor.kind_name().to_string();
    if let FieldKind::Scalar { type_name } = &descriptor.kind {
        text.push(' ');
        text.push_str(&normalize_type_name(type_name));
    }
    if let Some(element) = descriptor.element() {
        text.push_str(" of ");
        text.push_str(&summary(element));
    }
    text
}

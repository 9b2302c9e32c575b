//! Command handlers.
//!
//! This module contains the handlers for the generate and describe commands.

pub mod describe;
pub mod generate;

use crate::SchemaOpts;
use anyhow::Context;
use mock_core::SchemaDocument;

/// Load the schema document named on the command line.
pub fn load_document(opts: &SchemaOpts) -> anyhow::Result<SchemaDocument> {
    SchemaDocument::from_file(&opts.schema)
        .with_context(|| format!("Failed to load schema document: {:?}", opts.schema))
}

/// Name of the schema to work on: `--root`, else the document's root.
pub fn root_name(document: &SchemaDocument, opts: &SchemaOpts) -> anyhow::Result<String> {
    match &opts.root {
        Some(name) => {
            document.schema(name)?;
            Ok(name.clone())
        }
        None => {
            let (name, _) = document
                .root_schema()
                .context("Failed to resolve the root schema")?;
            Ok(name.to_string())
        }
    }
}

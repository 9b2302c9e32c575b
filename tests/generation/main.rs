//! Generation integration tests.
//!
//! These tests drive the engine end to end from the YAML fixtures in
//! `tests/fixtures/`:
//! 1. Load a schema document
//! 2. Build generation options from it (and from CLI-style overrides)
//! 3. Generate objects with a fixed seed
//! 4. Check the structural properties of the output

mod cli_tests;
mod depth_tests;
mod document_tests;
mod ordering_tests;
mod reference_tests;

use mock_core::SchemaDocument;
use mock_generator::{GenerationOptions, MockGenerator};

pub const SEED: u64 = 42;

/// Load a fixture document from `tests/fixtures/`.
pub fn load_fixture(name: &str) -> SchemaDocument {
    SchemaDocument::from_file(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("Failed to load fixture {name}: {e}"))
}

/// Generator for a fixture document with a fixed seed.
pub fn fixture_generator(document: &SchemaDocument) -> MockGenerator {
    MockGenerator::new(GenerationOptions::from_document(document).with_seed(SEED))
}

//! Reference expansion.

use crate::{fixture_generator, load_fixture, SEED};
use mock_core::{MockObject, MockValue};
use mock_generator::{GenerationOptions, MockGenerator};

#[test]
fn test_reference_is_identifier_when_disabled() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);
    let user = generator.generate_named("User").unwrap();

    let profile = user.get_str("profile").unwrap();
    assert_eq!(profile.len(), 24);
    assert!(profile.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_reference_expands_when_enabled() {
    let document = load_fixture("users.yaml");
    let options = GenerationOptions::from_document(&document)
        .with_references(true)
        .with_seed(SEED);
    let mut generator = MockGenerator::new(options);
    let user = generator.generate_named("User").unwrap();

    let profile = user.get("profile").and_then(MockValue::as_object).unwrap();
    assert_eq!(profile.keys().collect::<Vec<_>>(), vec!["bio", "age", "interests"]);
    let age = profile.get("age").and_then(MockValue::as_i64).unwrap();
    assert!((18..=90).contains(&age));
}

/// Reference hops below `node` that produced a non-empty object, following
/// `parent` links.
fn parent_chain(node: &MockObject) -> usize {
    match node.get("parent").and_then(MockValue::as_object) {
        Some(parent) if !parent.is_empty() => 1 + parent_chain(parent),
        _ => 0,
    }
}

#[test]
fn test_self_referential_tree_terminates() {
    let document = load_fixture("tree.yaml");
    let mut generator = MockGenerator::new(GenerationOptions::from_document(&document));
    let root = generator.generate_named("Node").unwrap();

    // max_depth 3 bounds the number of reference hops
    assert_eq!(parent_chain(&root), 3);

    let children = root.get("children").and_then(MockValue::as_array).unwrap();
    assert_eq!(children.len(), 2);
    assert!(children[0].as_object().unwrap().contains_key("label"));
}

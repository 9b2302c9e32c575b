//! Recursion depth limits.

use crate::{fixture_generator, load_fixture};
use mock_core::{FieldDeclaration, MockValue, SchemaPathMap};
use mock_generator::{generate, GenerationOptions};

#[test]
fn test_deep_fixture_truncates_at_limit() {
    let document = load_fixture("deep.yaml");
    let mut generator = fixture_generator(&document);
    let object = generator.generate_named("Deep").unwrap();

    let level1 = object.get("level1").and_then(MockValue::as_object).unwrap();
    let level2 = level1.get("level2").and_then(MockValue::as_object).unwrap();
    assert!(level2.is_empty());
}

/// `levels` nested schemas, the innermost holding a `leaf` string.
fn nested(levels: usize) -> SchemaPathMap {
    let mut paths = SchemaPathMap::new().with_field("leaf", FieldDeclaration::type_tag("String"));
    for level in (1..=levels).rev() {
        paths = SchemaPathMap::new().with_field(format!("level{level}"), FieldDeclaration::schema(paths));
    }
    paths
}

/// Number of non-empty scopes below the root.
fn filled_depth(object: &mock_core::MockObject) -> usize {
    let mut depth = 0;
    let mut current = object;
    loop {
        let next = current
            .iter()
            .find_map(|(_, value)| value.as_object())
            .filter(|child| !child.is_empty());
        match next {
            Some(child) => {
                depth += 1;
                current = child;
            }
            None => return depth,
        }
    }
}

#[test]
fn test_depth_limit_for_every_ceiling() {
    let paths = nested(8);

    for max_depth in 1..=6 {
        let options = GenerationOptions::default().with_max_depth(max_depth).with_seed(1);
        let object = generate(&paths, &options, None).unwrap();

        // The root occupies depth 1, so `max_depth - 1` nested scopes are filled
        assert_eq!(filled_depth(&object), max_depth - 1, "max_depth = {max_depth}");
    }
}

#[test]
fn test_shallow_schema_is_complete() {
    let paths = nested(2);
    let object = generate(&paths, &GenerationOptions::default(), None).unwrap();

    let leaf = object
        .get("level1")
        .and_then(MockValue::as_object)
        .and_then(|o| o.get("level2"))
        .and_then(MockValue::as_object)
        .and_then(|o| o.get_str("leaf"));
    assert!(leaf.is_some());
}

#[test]
fn test_zero_depth_yields_empty_root() {
    let paths = nested(1);
    let options = GenerationOptions::default().with_max_depth(0);
    assert!(generate(&paths, &options, None).unwrap().is_empty());
}

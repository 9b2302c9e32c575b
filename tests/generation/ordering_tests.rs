//! Dependency ordering, cycles and custom generators.

use crate::{fixture_generator, load_fixture, SEED};
use mock_core::{DependencyMap, MockValue, SchemaPathMap, ROOT_SCOPE};
use mock_generator::{generate, GenerationOptions, GeneratorError, MockGenerator, ResolveError};

#[test]
fn test_cycle_fixture_fails_without_partial_result() {
    let document = load_fixture("cycle.yaml");
    let mut generator = fixture_generator(&document);

    match generator.generate_named("Broken") {
        Err(GeneratorError::Dependency(ResolveError::CycleDetected { scope, chain, .. })) => {
            assert_eq!(scope, ROOT_SCOPE);
            assert_eq!(chain.first(), chain.last());
            assert_eq!(chain.len(), 3);
        }
        other => panic!("Expected a cycle error, got {other:?}"),
    }
}

#[test]
fn test_email_derived_from_username() {
    let paths = SchemaPathMap::from_yaml(
        r#"
email: String
name: String
username: { type: String, minLength: 4, maxLength: 8 }
"#,
    )
    .unwrap();

    let options = GenerationOptions::default()
        .with_seed(SEED)
        .with_dependencies(DependencyMap::new().with_dependency(ROOT_SCOPE, "email", ["username"]))
        .with_type_generator("String", |partial, field| {
            if field.field_name == "email" {
                let username = partial.get_str("username").unwrap_or_default();
                MockValue::String(format!("{username}@example.com"))
            } else {
                MockValue::String(format!("{}-value", field.field_name))
            }
        });

    let object = generate(&paths, &options, None).unwrap();

    assert_eq!(object.keys().collect::<Vec<_>>(), vec!["username", "email", "name"]);
    let username = object.get_str("username").unwrap();
    assert_eq!(object.get_str("email"), Some(format!("{username}@example.com").as_str()));
}

#[test]
fn test_dependency_places_field_after_its_source() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);
    let user = generator.generate_named("User").unwrap();

    let keys: Vec<_> = user.keys().collect();
    let username = keys.iter().position(|k| *k == "username").unwrap();
    let email = keys.iter().position(|k| *k == "email").unwrap();
    assert!(username < email);

    let address = user.get("address").and_then(MockValue::as_object).unwrap();
    assert_eq!(address.keys().collect::<Vec<_>>(), vec!["city", "zip"]);
}

#[test]
fn test_custom_field_generator_always_wins() {
    let paths = SchemaPathMap::from_yaml(
        r#"
id: ObjectId
nested: !schema
  id: Number
"#,
    )
    .unwrap();
    let options = GenerationOptions::default().with_field_generator("id", || MockValue::Int(1));
    let mut generator = MockGenerator::new(options);

    for object in generator.generate_many(&paths, 5).unwrap() {
        assert_eq!(object.get("id"), Some(&MockValue::Int(1)));
        let nested = object.get("nested").and_then(MockValue::as_object).unwrap();
        assert_eq!(nested.get("id"), Some(&MockValue::Int(1)));
    }
}

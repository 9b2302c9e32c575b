//! Value-level properties of objects generated from the users fixture.

use crate::{fixture_generator, load_fixture};
use mock_core::MockValue;
use mock_generator::GenerationOptions;

#[test]
fn test_user_fields_match_declarations() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);
    let user = generator.generate_named("User").unwrap();

    let username = user.get_str("username").unwrap();
    assert!((4..=8).contains(&username.len()), "username: {username}");

    assert_eq!(user.get_str("email").unwrap().len(), 5);

    let age = user.get("age").and_then(MockValue::as_i64).unwrap();
    assert!((1..=15).contains(&age));

    let score = user.get("score").and_then(MockValue::as_f64).unwrap();
    assert!((0.0..=1.0).contains(&score));

    assert!(user.get("verified").and_then(MockValue::as_bool).is_some());
    assert!(user.get("created_at").and_then(MockValue::as_datetime).is_some());

    let tags = user.get("tags").and_then(MockValue::as_array).unwrap();
    assert_eq!(tags.len(), 3);
    assert!(tags.iter().all(|tag| tag.as_str().is_some()));

    let metadata = user.get("metadata").and_then(MockValue::as_object).unwrap();
    assert_eq!(metadata.keys().collect::<Vec<_>>(), vec!["a", "b"]);

    // Null declarations are skipped entirely
    assert!(!user.contains_key("legacy"));
}

#[test]
fn test_enum_values_are_respected() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);

    for _ in 0..50 {
        let user = generator.generate_named("User").unwrap();
        let status = user.get_str("status").unwrap();
        assert!(["active", "suspended", "deleted"].contains(&status), "status: {status}");
    }
}

#[test]
fn test_pattern_is_respected() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);

    for _ in 0..20 {
        let user = generator.generate_named("User").unwrap();
        let code = user.get_str("code").unwrap();
        let (letters, digits) = code.split_once('-').unwrap();

        assert_eq!(letters.len(), 3);
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(digits.len(), 4);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_embedded_documents() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);
    let user = generator.generate_named("User").unwrap();

    let address = user.get("address").and_then(MockValue::as_object).unwrap();
    assert!(address.get_str("city").is_some());
    assert!(address.get_str("zip").is_some());

    let orders = user.get("orders").and_then(MockValue::as_array).unwrap();
    assert_eq!(orders.len(), 3);
    for order in orders {
        let order = order.as_object().unwrap();
        let quantity = order.get("quantity").and_then(MockValue::as_i64).unwrap();
        assert!((1..=5).contains(&quantity));
    }
}

#[test]
fn test_fixed_values_override_types() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);

    for _ in 0..5 {
        let user = generator.generate_named("User").unwrap();
        assert_eq!(user.get_str("source"), Some("fixture"));
    }
}

#[test]
fn test_same_seed_same_objects() {
    let document = load_fixture("users.yaml");
    let paths = document.schema("User").unwrap();
    let options = GenerationOptions::from_document(&document).with_seed(7);

    let mut first = mock_generator::MockGenerator::new(options.clone());
    let mut second = mock_generator::MockGenerator::new(options);

    let mut a = first.generate(paths).unwrap();
    let mut b = second.generate(paths).unwrap();

    // Dates are anchored at the current time
    a.insert("created_at", MockValue::Null);
    b.insert("created_at", MockValue::Null);
    assert_eq!(a, b);
}

#[test]
fn test_serializes_in_generation_order() {
    let document = load_fixture("users.yaml");
    let mut generator = fixture_generator(&document);
    let user = generator.generate_named("User").unwrap();

    let json = serde_json::to_string(&user).unwrap();
    let username = json.find("\"username\"").unwrap();
    let email = json.find("\"email\"").unwrap();
    let status = json.find("\"status\"").unwrap();
    assert!(username < email && email < status);
}

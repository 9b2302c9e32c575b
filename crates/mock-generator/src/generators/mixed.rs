//! Placeholder for untyped (`Mixed`) content.

use crate::generators::string::generate_alphanumeric;
use mock_core::{MockObject, MockValue};
use rand::Rng;

/// Generate `{ a: <5 alphanumeric chars>, b: <integer in 0..=8> }`.
pub fn generate_mixed<R: Rng>(rng: &mut R) -> MockValue {
    let a = generate_alphanumeric(rng, 5);
    let b: i64 = rng.gen_range(0..=8);
    MockObject::new().field("a", a).field("b", b).into()
}

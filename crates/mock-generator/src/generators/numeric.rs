//! Numeric value generators.

use mock_core::MockValue;
use rand::Rng;

/// Default lower bound for `number` fields.
pub const DEFAULT_MIN: i64 = 1;

/// Default upper bound for `number` fields.
pub const DEFAULT_MAX: i64 = 15;

/// Order a pair of bounds, swapping them if they are inverted.
pub fn ordered_bounds<T: PartialOrd>(field: &str, min: T, max: T) -> (T, T) {
    if min > max {
        tracing::warn!(field, "Inverted bounds; swapping min and max");
        (max, min)
    } else {
        (min, max)
    }
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> MockValue {
    MockValue::Int(rng.gen_range(min..=max))
}

/// Generate a random float in the given range (inclusive), rounded to two
/// decimal places.
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> MockValue {
    let value: f64 = rng.gen_range(min..=max);
    MockValue::Float((value * 100.0).round() / 100.0)
}

//! String value generators.

use crate::generators::numeric::ordered_bounds;
use crate::generators::pattern::generate_pattern;
use mock_core::{Constraints, MockValue};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of unconstrained strings.
pub const DEFAULT_LENGTH: usize = 5;

/// Repetition bound for patterns without `max_length`.
pub const DEFAULT_PATTERN_REPEAT: usize = 10;

/// Generate a random alphanumeric string of exactly `length` characters.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R, length: usize) -> String {
    std::iter::repeat_with(|| char::from(rng.sample(Alphanumeric)))
        .take(length)
        .collect()
}

/// Generate a string honoring enum, pattern and length constraints, in
/// that order of precedence.
pub fn generate_string<R: Rng>(rng: &mut R, field: &str, constraints: &Constraints) -> MockValue {
    if let Some(values) = constraints.enum_values.as_deref() {
        if !values.is_empty() {
            let idx = rng.gen_range(0..values.len());
            return MockValue::String(values[idx].clone());
        }
    }

    if let Some(pattern) = &constraints.pattern {
        let max_repeat = constraints.max_length.unwrap_or(DEFAULT_PATTERN_REPEAT);
        match generate_pattern(rng, pattern, max_repeat) {
            Ok(value) => return MockValue::String(value),
            Err(e) => {
                tracing::warn!(field, pattern = %pattern, error = %e, "Invalid pattern; generating alphanumeric string");
            }
        }
    }

    let length = match (constraints.min_length, constraints.max_length) {
        (min, Some(max)) => {
            let (min, max) = ordered_bounds(field, min.unwrap_or(1), max);
            rng.gen_range(min..=max)
        }
        (Some(min), None) => min,
        (None, None) => DEFAULT_LENGTH,
    };

    MockValue::String(generate_alphanumeric(rng, length))
}

//! Timestamp value generators.

use chrono::{Duration, Utc};
use mock_core::MockValue;
use rand::Rng;

/// Width of the "recent" window, in milliseconds (one day).
pub const RECENT_WINDOW_MS: i64 = 24 * 60 * 60 * 1000;

/// Generate a timestamp within the last day.
///
/// This is NOT deterministic - the window is anchored at the current time.
pub fn generate_recent<R: Rng>(rng: &mut R) -> MockValue {
    let offset = rng.gen_range(0..=RECENT_WINDOW_MS);
    MockValue::DateTime(Utc::now() - Duration::milliseconds(offset))
}

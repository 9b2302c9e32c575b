//! Pattern-constrained string generator.
//!
//! Produces strings matching a regular expression. Unbounded repetitions
//! (`*`, `+`, `{n,}`) repeat at most `max_repeat` times beyond their minimum.

use rand::Rng;

/// Generate a string matching `pattern`.
///
/// A leading `^` and trailing `$` are accepted and ignored, since generated
/// strings always span the whole match.
pub fn generate_pattern<R: Rng>(
    rng: &mut R,
    pattern: &str,
    max_repeat: usize,
) -> Result<String, rand_regex::Error> {
    let max_repeat = u32::try_from(max_repeat).unwrap_or(u32::MAX);
    let regex = rand_regex::Regex::compile(strip_anchors(pattern), max_repeat)?;
    Ok(rng.sample::<String, _>(&regex))
}

fn strip_anchors(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    match pattern.strip_suffix('$') {
        Some(rest) if !is_escaped_tail(rest) => rest,
        _ => pattern,
    }
}

/// True if `s` ends in an odd number of backslashes.
fn is_escaped_tail(s: &str) -> bool {
    s.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

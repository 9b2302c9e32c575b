//! Primitive value generators.
//!
//! Stateless producers over a caller-supplied RNG. The synthesizer decides
//! which one to call with which constraints; these functions only produce
//! values.

pub mod identifier;
pub mod mixed;
pub mod numeric;
pub mod pattern;
pub mod static_value;
pub mod string;
pub mod timestamp;

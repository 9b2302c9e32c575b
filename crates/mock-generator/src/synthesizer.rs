//! Type value synthesizer.
//!
//! Maps a normalized type name plus field metadata to one value. Custom type
//! generators registered in [`GenerationOptions`](crate::GenerationOptions)
//! are consulted first, then the built-in table below.
//!
//! | normalized type      | value                                     |
//! |----------------------|-------------------------------------------|
//! | `string`             | enum pick, pattern match or alphanumeric  |
//! | `number`             | integer in `[min ?? 1, max ?? 15]`        |
//! | `double`, `decimal`  | float in the same range, 2 decimals       |
//! | `date`               | timestamp within the last day             |
//! | `boolean`            | fair coin                                 |
//! | `objectid`           | 24 hex characters                         |
//! | `uuid`               | hyphenated v4 UUID                        |
//! | `mixed`              | `{ a: <5 chars>, b: <0..=8> }`            |
//!
//! Anything else logs a warning and yields [`UNKNOWN_TYPE_PLACEHOLDER`].

use crate::context::{FieldOptions, GenerationContext};
use crate::generators::identifier::{generate_object_id, generate_uuid_v4};
use crate::generators::mixed::generate_mixed;
use crate::generators::numeric::{
    generate_float_range, generate_int_range, ordered_bounds, DEFAULT_MAX, DEFAULT_MIN,
};
use crate::generators::string::generate_string;
use crate::generators::timestamp::generate_recent;
use mock_core::{MockObject, MockValue};
use rand::Rng;
use tracing::warn;

/// Value returned for unrecognized types.
pub const UNKNOWN_TYPE_PLACEHOLDER: &str = "Unknown Type";

/// Normalized name of the untyped kind.
pub const MIXED_TYPE: &str = "mixed";

const SCHEMA_AFFIX: &str = "schema";

/// Collapse equivalent spellings of a type to one key.
///
/// Lowercases, keeps the last `.` segment and strips a `schema` prefix or
/// suffix: `String`, `SchemaString`, `StringSchema` and
/// `Schema.Types.String` all become `string`.
pub fn normalize_type_name(type_name: &str) -> String {
    let lowered = type_name.trim().to_lowercase();
    let last = lowered.rsplit('.').next().unwrap_or_default();

    let stripped = last
        .strip_prefix(SCHEMA_AFFIX)
        .or_else(|| last.strip_suffix(SCHEMA_AFFIX))
        .unwrap_or(last);

    if stripped.is_empty() {
        last.to_string()
    } else {
        stripped.to_string()
    }
}

/// Produce one value for a scalar or mixed field.
pub fn synthesize<R: Rng>(
    type_name: &str,
    ctx: GenerationContext<'_>,
    field_options: &FieldOptions,
    partial: &MockObject,
    rng: &mut R,
) -> MockValue {
    let normalized = normalize_type_name(type_name);

    if let Some(generator) = ctx.options.type_generator(&normalized) {
        return generator(partial, field_options);
    }

    let field = field_options.field_name.as_str();
    let constraints = &field_options.constraints;

    match normalized.as_str() {
        "string" => generate_string(rng, field, constraints),
        "number" => {
            let (min, max) = ordered_bounds(
                field,
                constraints.min.unwrap_or(DEFAULT_MIN),
                constraints.max.unwrap_or(DEFAULT_MAX),
            );
            generate_int_range(rng, min, max)
        }
        "double" | "decimal" | "decimal128" => {
            let (min, max) = ordered_bounds(
                field,
                constraints.min.unwrap_or(DEFAULT_MIN) as f64,
                constraints.max.unwrap_or(DEFAULT_MAX) as f64,
            );
            generate_float_range(rng, min, max)
        }
        "date" => generate_recent(rng),
        "boolean" => MockValue::Bool(rng.gen_bool(0.5)),
        "objectid" => generate_object_id(rng),
        "uuid" => generate_uuid_v4(rng),
        MIXED_TYPE => generate_mixed(rng),
        _ => {
            warn!(field, type_name, "Unknown type; emitting placeholder");
            MockValue::from(UNKNOWN_TYPE_PLACEHOLDER)
        }
    }
}

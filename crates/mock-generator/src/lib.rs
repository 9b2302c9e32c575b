//! Mock data generator for the mockgen framework.
//!
//! This crate walks a [`SchemaPathMap`](mock_core::SchemaPathMap) and
//! produces a [`MockObject`](mock_core::MockObject) with a plausible value
//! for every declared field. Nested schemas, embedded documents, arrays and
//! references are expanded recursively up to a depth limit.
//!
//! # Architecture
//!
//! ```text
//! SchemaPathMap + GenerationOptions
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │    MockGenerator     │
//! │                      │
//! │  resolver   (order)  │
//! │  descriptor (kind)   │
//! │  synthesizer (value) │
//! │  rng (StdRng)        │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!       MockObject { field: MockValue, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_generator::{GenerationOptions, MockGenerator};
//! use mock_core::SchemaPathMap;
//!
//! let paths = SchemaPathMap::from_yaml(r#"
//! name: String
//! age: { type: Number, min: 18, max: 65 }
//! tags: [String]
//! "#).unwrap();
//!
//! let mut generator = MockGenerator::new(GenerationOptions::default().with_seed(42));
//! let object = generator.generate(&paths).unwrap();
//!
//! assert!(object.get_str("name").is_some());
//! assert_eq!(object.get("tags").and_then(|t| t.as_array()).map(Vec::len), Some(3));
//! ```
//!
//! # Types
//!
//! The built-in synthesizer understands `String`, `Number`, `Double`,
//! `Decimal`, `Date`, `Boolean`, `ObjectId`, `UUID` and `Mixed`, in any
//! casing and with or without a `Schema`/`Schema.Types.` wrapper. Other
//! types yield `"Unknown Type"` unless a custom type generator is
//! registered for them.

pub mod context;
pub mod descriptor;
pub mod generator;
pub mod generators;
pub mod resolver;
pub mod synthesizer;

// Re-exports for convenience
pub use context::{
    FieldGenerator, FieldOptions, GenerationContext, GenerationOptions, TypeGenerator,
    DEFAULT_ARRAY_LENGTH, DEFAULT_MAX_DEPTH,
};
pub use descriptor::{describe, FieldDescriptor, FieldKind};
pub use generator::{generate, GeneratorError, MockGenerator};
pub use resolver::{order, ResolveError};
pub use synthesizer::{normalize_type_name, synthesize, UNKNOWN_TYPE_PLACEHOLDER};

//! Core types for the mockgen framework.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line tool:
//!
//! - [`FieldDeclaration`] - Raw, heterogeneous field declarations
//! - [`SchemaPathMap`] - Ordered field map for one schema scope
//! - [`SchemaRegistry`] - Named schemas used as reference targets
//! - [`DependencyMap`] - Per-scope field ordering edges
//! - [`MockValue`] / [`MockObject`] - Generated values
//! - [`SchemaDocument`] - Schema documents loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-generator  (descriptor adapter, resolver, engine)
//!    │
//!    └─── mockgen         (CLI: generate / describe)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::SchemaDocument;
//!
//! let document = SchemaDocument::from_yaml(r#"
//! schemas:
//!   User:
//!     name: String
//!     age: { type: Number, min: 18, max: 65 }
//! "#).unwrap();
//!
//! let (name, paths) = document.root_schema().unwrap();
//! assert_eq!(name, "User");
//! assert_eq!(paths.field_names(), vec!["name", "age"]);
//! ```

pub mod dependencies;
pub mod options;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use dependencies::{DependencyMap, ScopeDependencies, ROOT_SCOPE};
pub use options::OptionOverrides;
pub use schema::{
    Constraints, DeclarationObject, FieldDeclaration, SchemaDocument, SchemaError, SchemaPathMap,
    SchemaRegistry,
};
pub use values::{MockObject, MockValue};

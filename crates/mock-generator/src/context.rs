//! Generation options and the per-descent context.
//!
//! `GenerationOptions` is the owned, immutable configuration of one
//! top-level call. `GenerationContext` is a small `Copy` view over it that
//! carries the recursion depth; every descent derives a new context value
//! instead of mutating a shared one, so sibling branches never see each
//! other's depth.

use crate::generators::static_value::yaml_to_mock_value;
use crate::synthesizer::normalize_type_name;
use mock_core::{
    Constraints, DependencyMap, MockObject, MockValue, OptionOverrides, SchemaDocument,
    SchemaPathMap, SchemaRegistry,
};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Default element count for generated arrays.
pub const DEFAULT_ARRAY_LENGTH: usize = 3;

/// Default recursion ceiling.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Producer for a single field, by field name.
pub type FieldGenerator = Arc<dyn Fn() -> MockValue + Send + Sync>;

/// Producer for a type, receiving the partially built object and the
/// metadata of the field being generated.
pub type TypeGenerator = Arc<dyn Fn(&MockObject, &FieldOptions) -> MockValue + Send + Sync>;

/// Metadata of the field being generated, passed to type generators.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldOptions {
    /// Name of the field
    pub field_name: String,

    /// Constraints from the declaration
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl FieldOptions {
    pub fn new(field_name: impl Into<String>, constraints: Constraints) -> Self {
        Self {
            field_name: field_name.into(),
            constraints,
        }
    }

    /// Enumeration values, if any.
    pub fn enum_values(&self) -> Option<&[String]> {
        self.constraints.enum_values.as_deref()
    }
}

/// Configuration for one generation call.
#[derive(Clone)]
pub struct GenerationOptions {
    /// Element count for generated arrays
    pub array_length: usize,

    /// Recursion ceiling
    pub max_depth: usize,

    /// Whether reference fields expand to the referenced schema
    pub handle_references: bool,

    /// Reference targets by schema name
    pub schemas: SchemaRegistry,

    /// Per-field-name producers
    pub custom_field_generators: HashMap<String, FieldGenerator>,

    /// Per-type producers, keyed by normalized type name
    pub type_generators: HashMap<String, TypeGenerator>,

    /// Per-scope field ordering edges
    pub type_generator_dependencies: DependencyMap,

    /// RNG seed; entropy when unset
    pub seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            array_length: DEFAULT_ARRAY_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
            handle_references: false,
            schemas: SchemaRegistry::new(),
            custom_field_generators: HashMap::new(),
            type_generators: HashMap::new(),
            type_generator_dependencies: DependencyMap::new(),
            seed: None,
        }
    }
}

impl fmt::Debug for GenerationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut field_generators: Vec<_> = self.custom_field_generators.keys().collect();
        field_generators.sort();
        let mut type_generators: Vec<_> = self.type_generators.keys().collect();
        type_generators.sort();

        f.debug_struct("GenerationOptions")
            .field("array_length", &self.array_length)
            .field("max_depth", &self.max_depth)
            .field("handle_references", &self.handle_references)
            .field("schemas", &self.schemas.names())
            .field("custom_field_generators", &field_generators)
            .field("type_generators", &type_generators)
            .field("type_generator_dependencies", &self.type_generator_dependencies)
            .field("seed", &self.seed)
            .finish()
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a schema document: every schema becomes a
    /// reference target, fixed values become field generators and the
    /// document's `options:` section is applied over the defaults.
    pub fn from_document(document: &SchemaDocument) -> Self {
        let mut options = Self::default()
            .with_schemas(document.schemas.clone())
            .with_dependencies(document.dependencies.clone())
            .with_overrides(&document.options);

        for (field, value) in &document.fixed_values {
            let value = yaml_to_mock_value(value);
            options = options.with_field_generator(field.clone(), move || value.clone());
        }
        options
    }

    pub fn with_array_length(mut self, array_length: usize) -> Self {
        self.array_length = array_length;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_references(mut self, handle_references: bool) -> Self {
        self.handle_references = handle_references;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the reference registry.
    pub fn with_schemas(mut self, schemas: SchemaRegistry) -> Self {
        self.schemas = schemas;
        self
    }

    /// Register one reference target.
    pub fn with_schema(mut self, name: impl Into<String>, paths: SchemaPathMap) -> Self {
        self.schemas.insert(name, paths);
        self
    }

    /// Replace the dependency edges.
    pub fn with_dependencies(mut self, dependencies: DependencyMap) -> Self {
        self.type_generator_dependencies = dependencies;
        self
    }

    /// Register a producer for every field with this name.
    pub fn with_field_generator<F>(mut self, field: impl Into<String>, generator: F) -> Self
    where
        F: Fn() -> MockValue + Send + Sync + 'static,
    {
        self.custom_field_generators
            .insert(field.into(), Arc::new(generator));
        self
    }

    /// Register a producer for a type. The name is normalized, so `"String"`
    /// and `"string"` register the same generator.
    pub fn with_type_generator<F>(mut self, type_name: &str, generator: F) -> Self
    where
        F: Fn(&MockObject, &FieldOptions) -> MockValue + Send + Sync + 'static,
    {
        self.type_generators
            .insert(normalize_type_name(type_name), Arc::new(generator));
        self
    }

    /// Apply overrides; fields set in `overrides` replace the current values.
    pub fn with_overrides(mut self, overrides: &OptionOverrides) -> Self {
        if let Some(array_length) = overrides.array_length {
            self.array_length = array_length;
        }
        if let Some(max_depth) = overrides.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(handle_references) = overrides.handle_references {
            self.handle_references = handle_references;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// Get the producer registered for a field name.
    pub fn field_generator(&self, field: &str) -> Option<&FieldGenerator> {
        self.custom_field_generators.get(field)
    }

    /// Get the producer registered for a normalized type name.
    pub fn type_generator(&self, normalized_type: &str) -> Option<&TypeGenerator> {
        self.type_generators.get(normalized_type)
    }
}

/// Depth-tracking view over the options for one scope invocation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    /// Shared configuration
    pub options: &'a GenerationOptions,

    /// Nesting depth of the current scope
    pub current_depth: usize,

    /// Reference hops taken to reach the current scope
    pub reference_depth: usize,
}

impl<'a> GenerationContext<'a> {
    /// Context for a top-level call.
    pub fn new(options: &'a GenerationOptions) -> Self {
        Self {
            options,
            current_depth: 0,
            reference_depth: 0,
        }
    }

    /// Context for entering a scope one level deeper.
    pub fn enter(self) -> Self {
        Self {
            current_depth: self.current_depth + 1,
            ..self
        }
    }

    /// Context for following a reference: a fresh depth budget, one more hop.
    pub fn for_reference(self) -> Self {
        Self {
            current_depth: 0,
            reference_depth: self.reference_depth + 1,
            ..self
        }
    }

    /// True once either depth exceeds the ceiling.
    pub fn is_exhausted(&self) -> bool {
        self.current_depth > self.options.max_depth
            || self.reference_depth > self.options.max_depth
    }

    pub fn array_length(&self) -> usize {
        self.options.array_length
    }

    pub fn handle_references(&self) -> bool {
        self.options.handle_references
    }

    pub fn schemas(&self) -> &'a SchemaRegistry {
        &self.options.schemas
    }

    pub fn dependencies(&self) -> &'a DependencyMap {
        &self.options.type_generator_dependencies
    }
}

//! Schema declarations for mock data generation.
//!
//! This module models the schema definition source: raw field declarations
//! in the shapes a document-database ODM allows, loaded from YAML.
//!
//! ## Declaration shapes
//!
//! ```yaml
//! name: String                          # bare type tag
//! status: { type: String, enum: [a, b] } # object with constraints
//! address: !schema { city: String }     # nested schema
//! owner: !subdocument { name: String }  # single embedded document
//! items: !document_array { sku: String } # array of embedded documents
//! tags: [String]                        # plain array
//! profile: { type: ObjectId, ref: Profile }
//! ```
//!
//! Declarations are kept raw on purpose. Classification into a closed set
//! of kinds happens in the generator's descriptor adapter.

use crate::dependencies::DependencyMap;
use crate::options::OptionOverrides;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value as YamlValue};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Schema not found in registry
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    /// Declaration cannot be represented
    #[error("Invalid declaration for field '{field}': {reason}")]
    InvalidDeclaration { field: String, reason: String },
}

// ============================================================================
// Field Declarations
// ============================================================================

/// Constraint metadata attached to a field declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    /// Allowed values for string fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum string length, also the repetition bound for patterns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regular expression generated strings must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Minimum numeric value (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,

    /// Maximum numeric value (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,

    /// Name of the schema this field references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl Constraints {
    /// Fill every unset constraint from `fallback`.
    pub fn or(self, fallback: Constraints) -> Constraints {
        Constraints {
            enum_values: self.enum_values.or(fallback.enum_values),
            min_length: self.min_length.or(fallback.min_length),
            max_length: self.max_length.or(fallback.max_length),
            pattern: self.pattern.or(fallback.pattern),
            min: self.min.or(fallback.min),
            max: self.max.or(fallback.max),
            reference: self.reference.or(fallback.reference),
        }
    }

    /// True if no constraint is set.
    pub fn is_empty(&self) -> bool {
        *self == Constraints::default()
    }

    /// Read constraint keys from a YAML mapping. Unknown keys are ignored.
    fn from_mapping(map: &Mapping) -> Self {
        let mut constraints = Constraints::default();
        for (key, value) in map {
            let Some(key) = key.as_str() else { continue };
            match key {
                "enum" | "enum_values" | "enumValues" => {
                    constraints.enum_values = enum_members(value);
                }
                "minLength" | "min_length" | "minlength" => {
                    constraints.min_length = value.as_u64().map(|n| n as usize);
                }
                "maxLength" | "max_length" | "maxlength" => {
                    constraints.max_length = value.as_u64().map(|n| n as usize);
                }
                "match" | "pattern" => {
                    constraints.pattern = value.as_str().map(|s| s.to_string());
                }
                "min" => constraints.min = yaml_to_i64(value),
                "max" => constraints.max = yaml_to_i64(value),
                "ref" | "reference" => {
                    constraints.reference = value.as_str().map(|s| s.to_string());
                }
                _ => {}
            }
        }
        constraints
    }
}

fn enum_members(value: &YamlValue) -> Option<Vec<String>> {
    let items = value.as_sequence()?;
    Some(
        items
            .iter()
            .filter_map(|item| match item {
                YamlValue::String(s) => Some(s.clone()),
                YamlValue::Number(n) => Some(n.to_string()),
                YamlValue::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
    )
}

fn yaml_to_i64(value: &YamlValue) -> Option<i64> {
    let n = value.as_i64();
    n.or_else(|| value.as_f64().map(|f| f.round() as i64))
}

/// A plain object declaration: `{ type: ..., <constraints>, options: {...} }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationObject {
    /// Inner type declaration
    pub type_decl: Option<FieldDeclaration>,

    /// Nested `options` object, which may carry the type and constraints
    pub options: Option<Box<DeclarationObject>>,

    /// Constraints declared directly on this object
    pub constraints: Constraints,
}

impl DeclarationObject {
    /// Object declaration with the given inner type.
    pub fn of_type(type_decl: FieldDeclaration) -> Self {
        Self {
            type_decl: Some(type_decl),
            ..Self::default()
        }
    }

    /// Set the enumeration values.
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the string length bounds.
    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.constraints.min_length = min;
        self.constraints.max_length = max;
        self
    }

    /// Set the numeric bounds.
    pub fn with_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.constraints.min = min;
        self.constraints.max = max;
        self
    }

    /// Set the pattern generated strings must match.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.pattern = Some(pattern.into());
        self
    }

    /// Set the referenced schema name.
    pub fn with_reference(mut self, schema: impl Into<String>) -> Self {
        self.constraints.reference = Some(schema.into());
        self
    }

    /// Set the nested `options` object.
    pub fn with_options(mut self, options: DeclarationObject) -> Self {
        self.options = Some(Box::new(options));
        self
    }

    fn from_mapping(map: &Mapping, field: &str) -> Result<Self, SchemaError> {
        let type_decl = match map.get("type") {
            Some(value) => Some(FieldDeclaration::from_yaml(value, field)?),
            None => None,
        };
        let options = match map.get("options") {
            Some(YamlValue::Mapping(inner)) => Some(Box::new(Self::from_mapping(inner, field)?)),
            _ => None,
        };
        Ok(Self {
            type_decl,
            options,
            constraints: Constraints::from_mapping(map),
        })
    }
}

/// Raw declaration of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDeclaration {
    /// Null, `false` or empty declaration
    Absent,

    /// Bare type reference such as `String` or `Schema.Types.ObjectId`
    TypeTag(String),

    /// Nested schema
    Schema(SchemaPathMap),

    /// Single embedded sub-document
    Subdocument(SchemaPathMap),

    /// Array of embedded sub-documents
    DocumentArray(SchemaPathMap),

    /// Plain array; the first element declares the element type
    Array(Vec<FieldDeclaration>),

    /// Object carrying a type and constraints
    Object(Box<DeclarationObject>),

    /// Any other YAML scalar
    Literal(YamlValue),
}

impl FieldDeclaration {
    /// Bare type tag declaration.
    pub fn type_tag(name: impl Into<String>) -> Self {
        Self::TypeTag(name.into())
    }

    /// Nested schema declaration.
    pub fn schema(paths: SchemaPathMap) -> Self {
        Self::Schema(paths)
    }

    /// Single embedded sub-document declaration.
    pub fn subdocument(paths: SchemaPathMap) -> Self {
        Self::Subdocument(paths)
    }

    /// Document array declaration.
    pub fn document_array(paths: SchemaPathMap) -> Self {
        Self::DocumentArray(paths)
    }

    /// Plain array whose elements follow `element`.
    pub fn array(element: FieldDeclaration) -> Self {
        Self::Array(vec![element])
    }

    /// Object declaration.
    pub fn object(object: DeclarationObject) -> Self {
        Self::Object(Box::new(object))
    }

    /// Check if the declaration is null, `false` or empty.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert a YAML value into a declaration.
    pub fn from_yaml(value: &YamlValue, field: &str) -> Result<Self, SchemaError> {
        match value {
            YamlValue::Null | YamlValue::Bool(false) => Ok(Self::Absent),
            YamlValue::String(s) if s.is_empty() => Ok(Self::Absent),
            YamlValue::String(s) => Ok(Self::TypeTag(s.clone())),
            YamlValue::Sequence(items) => items
                .iter()
                .map(|item| Self::from_yaml(item, field))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            YamlValue::Mapping(map) => Ok(Self::object(DeclarationObject::from_mapping(map, field)?)),
            YamlValue::Tagged(tagged) => {
                let tag = tagged.tag.to_string();
                let tag = tag.trim_start_matches('!').to_ascii_lowercase();
                let wrap: fn(SchemaPathMap) -> Self = match tag.as_str() {
                    "schema" => Self::Schema,
                    "subdocument" | "subdoc" => Self::Subdocument,
                    "document_array" | "documentarray" | "documents" => Self::DocumentArray,
                    // Unknown tags carry no meaning of their own
                    _ => return Self::from_yaml(&tagged.value, field),
                };
                match &tagged.value {
                    YamlValue::Mapping(map) => Ok(wrap(SchemaPathMap::from_mapping(map)?)),
                    _ => Err(SchemaError::InvalidDeclaration {
                        field: field.to_string(),
                        reason: format!("!{tag} must tag a mapping of fields"),
                    }),
                }
            }
            other => Ok(Self::Literal(other.clone())),
        }
    }
}

// ============================================================================
// Schema Path Maps
// ============================================================================

/// Ordered mapping from field name to raw declaration for one schema scope.
///
/// Insertion order is the default generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaPathMap {
    fields: Vec<(String, FieldDeclaration)>,
}

impl SchemaPathMap {
    /// Create an empty path map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, declaration: FieldDeclaration) -> Self {
        self.insert(name, declaration);
        self
    }

    /// Insert a field. Re-inserting a name replaces its declaration in place.
    pub fn insert(&mut self, name: impl Into<String>, declaration: FieldDeclaration) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = declaration,
            None => self.fields.push((name, declaration)),
        }
    }

    /// Get a field declaration by name.
    pub fn get(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, declaration)| declaration)
    }

    /// Check if a field is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get all field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDeclaration)> {
        self.fields.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a path map from a YAML mapping of fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let value: YamlValue = serde_yaml::from_str(yaml)?;
        match value {
            YamlValue::Mapping(map) => Self::from_mapping(&map),
            YamlValue::Null => Ok(Self::new()),
            _ => Err(SchemaError::InvalidDeclaration {
                field: String::new(),
                reason: "a schema must be a mapping of fields".to_string(),
            }),
        }
    }

    /// Build a path map from a YAML mapping, preserving key order.
    pub fn from_mapping(map: &Mapping) -> Result<Self, SchemaError> {
        let mut paths = Self::new();
        for (key, value) in map {
            let name = key
                .as_str()
                .ok_or_else(|| SchemaError::InvalidDeclaration {
                    field: format!("{key:?}"),
                    reason: "field names must be strings".to_string(),
                })?;
            paths.insert(name, FieldDeclaration::from_yaml(value, name)?);
        }
        Ok(paths)
    }
}

impl<'de> Deserialize<'de> for SchemaPathMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let map = Mapping::deserialize(deserializer)?;
        Self::from_mapping(&map).map_err(D::Error::custom)
    }
}

// ============================================================================
// Registry and Documents
// ============================================================================

/// Named schemas, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Schema definitions
    schemas: Vec<(String, SchemaPathMap)>,

    /// Cached schema lookup
    schema_map: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema, builder style.
    pub fn with_schema(mut self, name: impl Into<String>, paths: SchemaPathMap) -> Self {
        self.insert(name, paths);
        self
    }

    /// Add or replace a schema.
    pub fn insert(&mut self, name: impl Into<String>, paths: SchemaPathMap) {
        let name = name.into();
        match self.schema_map.get(&name) {
            Some(&idx) => self.schemas[idx].1 = paths,
            None => {
                self.schema_map.insert(name.clone(), self.schemas.len());
                self.schemas.push((name, paths));
            }
        }
    }

    /// Get a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaPathMap> {
        self.schema_map
            .get(name)
            .and_then(|&idx| self.schemas.get(idx))
            .map(|(_, paths)| paths)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schema_map.contains_key(name)
    }

    /// Get all schema names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// The first declared schema.
    pub fn first(&self) -> Option<(&str, &SchemaPathMap)> {
        self.schemas.first().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl<'de> Deserialize<'de> for SchemaRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let map = Mapping::deserialize(deserializer)?;
        let mut registry = SchemaRegistry::new();
        for (key, value) in &map {
            let name = key
                .as_str()
                .ok_or_else(|| D::Error::custom("schema names must be strings"))?;
            let paths = match value {
                YamlValue::Mapping(fields) => SchemaPathMap::from_mapping(fields),
                YamlValue::Null => Ok(SchemaPathMap::new()),
                _ => Err(SchemaError::InvalidDeclaration {
                    field: name.to_string(),
                    reason: "a schema must be a mapping of fields".to_string(),
                }),
            }
            .map_err(D::Error::custom)?;
            registry.insert(name, paths);
        }
        Ok(registry)
    }
}

fn default_version() -> u32 {
    1
}

/// A schema document: named schemas plus generation settings.
///
/// Loaded from a YAML file and used as the single source of truth for
/// what to generate.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    /// Document version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Schema generated by default; the first schema when unset
    #[serde(default)]
    pub root: Option<String>,

    /// Option overrides applied on top of the defaults
    #[serde(default)]
    pub options: OptionOverrides,

    /// Field ordering edges, by scope
    #[serde(default)]
    pub dependencies: DependencyMap,

    /// Static values for fields, by field name
    #[serde(default)]
    pub fixed_values: HashMap<String, YamlValue>,

    /// Named schemas
    pub schemas: SchemaRegistry,
}

impl SchemaDocument {
    /// Load a document from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Get a schema by name.
    pub fn schema(&self, name: &str) -> Result<&SchemaPathMap, SchemaError> {
        self.schemas
            .get(name)
            .ok_or_else(|| SchemaError::SchemaNotFound(name.to_string()))
    }

    /// Resolve the root schema: `root` if set, else the first schema.
    pub fn root_schema(&self) -> Result<(&str, &SchemaPathMap), SchemaError> {
        match &self.root {
            Some(name) => Ok((name.as_str(), self.schema(name)?)),
            None => self
                .schemas
                .first()
                .ok_or_else(|| SchemaError::SchemaNotFound("<root>".to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

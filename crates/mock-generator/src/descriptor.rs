//! Path descriptor adapter.
//!
//! Normalizes a raw [`FieldDeclaration`] into a [`FieldDescriptor`]: one
//! closed [`FieldKind`] plus the constraint metadata that applies to it.
//! The engine matches on the kind and never looks at raw declarations.
//!
//! Rules, in order:
//!
//! 1. bare type tag: `Scalar` (or `Mixed`)
//! 2. nested schema: `NestedSchema`
//! 3. embedded sub-document: `Subdocument`
//! 4. embedded document array: `DocumentArray`
//! 5. plain array: `PlainArray`, element adapted from the first item
//! 6. object with `type` (directly or under `options`): adapt the inner type
//!    and carry the constraints declared alongside it
//! 7. anything else: no descriptor, the field is skipped

use crate::context::FieldOptions;
use crate::synthesizer::{normalize_type_name, MIXED_TYPE};
use mock_core::{Constraints, DeclarationObject, FieldDeclaration, SchemaPathMap};

/// Classified shape of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind<'a> {
    /// Single value of a named type
    Scalar { type_name: String },

    /// Untyped content
    Mixed,

    /// Nested schema, generated as an object
    NestedSchema(&'a SchemaPathMap),

    /// Single embedded sub-document, generated as an object
    Subdocument(&'a SchemaPathMap),

    /// Array of embedded sub-documents
    DocumentArray(&'a SchemaPathMap),

    /// Plain array; `None` when the element type is unusable
    PlainArray(Option<Box<FieldDescriptor<'a>>>),
}

/// Normalized view of one field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor<'a> {
    pub name: String,
    pub kind: FieldKind<'a>,
    pub constraints: Constraints,
}

impl<'a> FieldDescriptor<'a> {
    /// Type name handed to the synthesizer, for scalar-like kinds.
    pub fn type_name(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Scalar { type_name } => Some(type_name),
            FieldKind::Mixed => Some(MIXED_TYPE),
            _ => None,
        }
    }

    /// Schema whose fields make up the generated object(s).
    pub fn nested_schema(&self) -> Option<&'a SchemaPathMap> {
        match self.kind {
            FieldKind::NestedSchema(paths)
            | FieldKind::Subdocument(paths)
            | FieldKind::DocumentArray(paths) => Some(paths),
            _ => None,
        }
    }

    /// Element descriptor of a plain array.
    pub fn element(&self) -> Option<&FieldDescriptor<'a>> {
        match &self.kind {
            FieldKind::PlainArray(element) => element.as_deref(),
            _ => None,
        }
    }

    /// Name of the referenced schema, if declared.
    pub fn reference(&self) -> Option<&str> {
        self.constraints.reference.as_deref()
    }

    /// Metadata passed to the synthesizer and type generators.
    pub fn field_options(&self) -> FieldOptions {
        FieldOptions::new(&self.name, self.constraints.clone())
    }

    /// Short name of the kind, for display.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            FieldKind::Scalar { .. } => "scalar",
            FieldKind::Mixed => "mixed",
            FieldKind::NestedSchema(_) => "nested_schema",
            FieldKind::Subdocument(_) => "subdocument",
            FieldKind::DocumentArray(_) => "document_array",
            FieldKind::PlainArray(_) => "array",
        }
    }
}

/// Adapt one raw declaration. Returns `None` when it has no usable type.
pub fn describe<'a>(name: &str, declaration: &'a FieldDeclaration) -> Option<FieldDescriptor<'a>> {
    let kind = match declaration {
        FieldDeclaration::Absent | FieldDeclaration::Literal(_) => return None,
        FieldDeclaration::TypeTag(tag) => {
            if normalize_type_name(tag) == MIXED_TYPE {
                FieldKind::Mixed
            } else {
                FieldKind::Scalar {
                    type_name: tag.clone(),
                }
            }
        }
        FieldDeclaration::Schema(paths) => FieldKind::NestedSchema(paths),
        FieldDeclaration::Subdocument(paths) => FieldKind::Subdocument(paths),
        FieldDeclaration::DocumentArray(paths) => FieldKind::DocumentArray(paths),
        FieldDeclaration::Array(items) => FieldKind::PlainArray(
            items
                .first()
                .and_then(|element| describe(name, element))
                .map(Box::new),
        ),
        FieldDeclaration::Object(object) => return describe_object(name, object),
    };

    Some(FieldDescriptor {
        name: name.to_string(),
        kind,
        constraints: Constraints::default(),
    })
}

fn describe_object<'a>(name: &str, object: &'a DeclarationObject) -> Option<FieldDescriptor<'a>> {
    let options = object.options.as_deref();
    let type_decl = object
        .type_decl
        .as_ref()
        .or_else(|| options.and_then(|o| o.type_decl.as_ref()))?;

    let mut descriptor = describe(name, type_decl)?;

    // Direct keys win over `options`, which win over the inner declaration
    let carried = match options {
        Some(options) => object.constraints.clone().or(options.constraints.clone()),
        None => object.constraints.clone(),
    };
    descriptor.constraints = carried.or(descriptor.constraints);
    Some(descriptor)
}

//! Recursive generator engine.

use crate::context::{FieldOptions, GenerationContext, GenerationOptions};
use crate::descriptor::{describe, FieldDescriptor, FieldKind};
use crate::resolver::{self, ResolveError};
use crate::synthesizer::{synthesize, MIXED_TYPE};
use mock_core::{MockObject, MockValue, SchemaPathMap, ROOT_SCOPE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Dependency(#[from] ResolveError),

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),
}

/// Mock object generator.
///
/// Owns the options and the random source. With `options.seed` set, the
/// same schema produces the same objects on every run (apart from `date`
/// fields, which are anchored at the current time).
pub struct MockGenerator<R = StdRng> {
    options: GenerationOptions,
    rng: R,
}

impl MockGenerator<StdRng> {
    /// Create a generator seeded from `options.seed`, or from entropy.
    pub fn new(options: GenerationOptions) -> Self {
        let rng = seeded_rng(options.seed);
        Self { options, rng }
    }
}

impl<R: Rng> MockGenerator<R> {
    /// Create a generator drawing from the given random source.
    pub fn with_rng(options: GenerationOptions, rng: R) -> Self {
        Self { options, rng }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Generate one object for the root scope.
    pub fn generate(&mut self, paths: &SchemaPathMap) -> Result<MockObject, GeneratorError> {
        self.generate_with_scope(paths, ROOT_SCOPE)
    }

    /// Generate one object, resolving dependencies under `scope_key`.
    pub fn generate_with_scope(
        &mut self,
        paths: &SchemaPathMap,
        scope_key: &str,
    ) -> Result<MockObject, GeneratorError> {
        let ctx = GenerationContext::new(&self.options);
        generate_scope(paths, ctx, scope_key, &mut self.rng)
    }

    /// Generate one object for a schema of the registry.
    pub fn generate_named(&mut self, name: &str) -> Result<MockObject, GeneratorError> {
        let paths = self
            .options
            .schemas
            .get(name)
            .ok_or_else(|| GeneratorError::SchemaNotFound(name.to_string()))?;
        let ctx = GenerationContext::new(&self.options);
        generate_scope(paths, ctx, ROOT_SCOPE, &mut self.rng)
    }

    /// Generate `count` objects for the root scope.
    pub fn generate_many(
        &mut self,
        paths: &SchemaPathMap,
        count: usize,
    ) -> Result<Vec<MockObject>, GeneratorError> {
        (0..count).map(|_| self.generate(paths)).collect()
    }
}

/// Generate one object with a fresh random source.
///
/// `scope_key` defaults to [`ROOT_SCOPE`].
pub fn generate(
    paths: &SchemaPathMap,
    options: &GenerationOptions,
    scope_key: Option<&str>,
) -> Result<MockObject, GeneratorError> {
    let mut rng = seeded_rng(options.seed);
    let ctx = GenerationContext::new(options);
    generate_scope(paths, ctx, scope_key.unwrap_or(ROOT_SCOPE), &mut rng)
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generate one scope. `parent` is the context of the caller; the depth is
/// incremented here.
fn generate_scope<R: Rng>(
    paths: &SchemaPathMap,
    parent: GenerationContext<'_>,
    scope_key: &str,
    rng: &mut R,
) -> Result<MockObject, GeneratorError> {
    let ctx = parent.enter();
    if ctx.is_exhausted() {
        debug!(
            scope = scope_key,
            depth = ctx.current_depth,
            reference_depth = ctx.reference_depth,
            "Depth limit reached; emitting empty object"
        );
        return Ok(MockObject::new());
    }

    let field_names = paths.field_names();
    let order = resolver::order(scope_key, &field_names, ctx.dependencies())?;

    let mut object = MockObject::new();
    for name in &order {
        // Dependency-only names have no declaration
        let Some(declaration) = paths.get(name) else {
            continue;
        };
        if declaration.is_absent() {
            continue;
        }
        let Some(descriptor) = describe(name, declaration) else {
            debug!(scope = scope_key, field = %name, "No usable type; skipping field");
            continue;
        };

        let value = generate_field(&descriptor, ctx, &object, rng)?;
        object.insert(name.as_str(), value);
    }

    Ok(object)
}

fn generate_field<R: Rng>(
    descriptor: &FieldDescriptor<'_>,
    ctx: GenerationContext<'_>,
    partial: &MockObject,
    rng: &mut R,
) -> Result<MockValue, GeneratorError> {
    if let Some(generator) = ctx.options.field_generator(&descriptor.name) {
        return Ok(generator());
    }

    let name = descriptor.name.as_str();

    // Array references apply per element, see `generate_array`
    if !matches!(descriptor.kind, FieldKind::PlainArray(_)) {
        if let Some(target) = reference_target(ctx, descriptor.reference()) {
            return generate_scope(target, ctx.for_reference(), name, rng).map(MockValue::Object);
        }
    }

    match &descriptor.kind {
        FieldKind::NestedSchema(paths) | FieldKind::Subdocument(paths) => {
            generate_scope(paths, ctx, name, rng).map(MockValue::Object)
        }
        FieldKind::DocumentArray(paths) => generate_objects(paths, ctx, name, rng),
        FieldKind::PlainArray(element) => {
            generate_array(descriptor, element.as_deref(), ctx, partial, rng)
        }
        FieldKind::Scalar { .. } | FieldKind::Mixed => {
            let type_name = descriptor.type_name().unwrap_or(MIXED_TYPE);
            Ok(synthesize(type_name, ctx, &descriptor.field_options(), partial, rng))
        }
    }
}

fn generate_array<R: Rng>(
    descriptor: &FieldDescriptor<'_>,
    element: Option<&FieldDescriptor<'_>>,
    ctx: GenerationContext<'_>,
    partial: &MockObject,
    rng: &mut R,
) -> Result<MockValue, GeneratorError> {
    let name = descriptor.name.as_str();
    let Some(element) = element else {
        debug!(field = name, "Array without a usable element type; emitting empty array");
        return Ok(MockValue::Array(Vec::new()));
    };

    let reference = element.reference().or_else(|| descriptor.reference());
    if let Some(target) = reference_target(ctx, reference) {
        let items = (0..ctx.array_length())
            .map(|_| generate_scope(target, ctx.for_reference(), name, rng).map(MockValue::Object))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(MockValue::Array(items));
    }

    let type_name = match &element.kind {
        FieldKind::NestedSchema(paths)
        | FieldKind::Subdocument(paths)
        | FieldKind::DocumentArray(paths) => return generate_objects(paths, ctx, name, rng),
        FieldKind::PlainArray(_) => {
            debug!(field = name, "Nested arrays are not supported; emitting empty array");
            return Ok(MockValue::Array(Vec::new()));
        }
        FieldKind::Scalar { .. } | FieldKind::Mixed => element.type_name().unwrap_or(MIXED_TYPE),
    };

    let field_options = FieldOptions::new(
        name,
        element
            .constraints
            .clone()
            .or(descriptor.constraints.clone()),
    );
    let items = (0..ctx.array_length())
        .map(|_| synthesize(type_name, ctx, &field_options, partial, rng))
        .collect();
    Ok(MockValue::Array(items))
}

fn generate_objects<R: Rng>(
    paths: &SchemaPathMap,
    ctx: GenerationContext<'_>,
    scope_key: &str,
    rng: &mut R,
) -> Result<MockValue, GeneratorError> {
    let items = (0..ctx.array_length())
        .map(|_| generate_scope(paths, ctx, scope_key, rng).map(MockValue::Object))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MockValue::Array(items))
}

fn reference_target<'a>(
    ctx: GenerationContext<'a>,
    reference: Option<&str>,
) -> Option<&'a SchemaPathMap> {
    if !ctx.handle_references() {
        return None;
    }
    let target = reference?;
    let paths = ctx.schemas().get(target);
    if paths.is_none() {
        debug!(target, "Reference target not in registry; generating declared type");
    }
    paths
}

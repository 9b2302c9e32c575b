//! Dependency resolver.
//!
//! Computes the order in which a scope's fields are generated. Without
//! edges the declaration order is returned unchanged; with edges a
//! depth-first topological sort places every field after the fields it
//! depends on, keeping the declaration order everywhere else.

use mock_core::{DependencyMap, ScopeDependencies};
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Dependency cycle in scope '{scope}' at field '{field}': {}", .chain.join(" -> "))]
    CycleDetected {
        scope: String,
        field: String,
        chain: Vec<String>,
    },
}

/// Order `field_names` for generation in `scope_key`.
pub fn order(
    scope_key: &str,
    field_names: &[&str],
    dependencies: &DependencyMap,
) -> Result<Vec<String>, ResolveError> {
    let deps = match dependencies.scope(scope_key) {
        Some(deps) if !deps.is_empty() => deps,
        _ => return Ok(field_names.iter().map(|name| name.to_string()).collect()),
    };

    let mut sorter = TopologicalSort {
        scope: scope_key,
        deps,
        known: field_names.iter().copied().collect(),
        resolved: HashSet::new(),
        visiting: Vec::new(),
        order: Vec::with_capacity(field_names.len()),
    };

    for field in field_names {
        sorter.visit(field)?;
    }

    Ok(sorter.order)
}

struct TopologicalSort<'a> {
    scope: &'a str,
    deps: &'a ScopeDependencies,
    known: HashSet<&'a str>,
    resolved: HashSet<String>,
    /// Fields on the current DFS path, outermost first
    visiting: Vec<String>,
    order: Vec<String>,
}

impl<'a> TopologicalSort<'a> {
    fn visit(&mut self, field: &str) -> Result<(), ResolveError> {
        if self.resolved.contains(field) {
            return Ok(());
        }

        if let Some(start) = self.visiting.iter().position(|f| f == field) {
            let mut chain = self.visiting[start..].to_vec();
            chain.push(field.to_string());
            return Err(ResolveError::CycleDetected {
                scope: self.scope.to_string(),
                field: field.to_string(),
                chain,
            });
        }

        self.visiting.push(field.to_string());

        let deps = self.deps;
        if let Some(edges) = deps.get(field) {
            for dependency in edges {
                if !self.known.contains(dependency.as_str()) && !deps.contains_key(dependency) {
                    warn!(
                        scope = self.scope,
                        field,
                        dependency = %dependency,
                        "Dependency is not a field of this scope; ignoring edge"
                    );
                    continue;
                }
                self.visit(dependency)?;
            }
        }

        self.visiting.pop();
        self.resolved.insert(field.to_string());
        self.order.push(field.to_string());
        Ok(())
    }
}

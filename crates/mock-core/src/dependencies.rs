//! Per-scope field dependency declarations.
//!
//! A dependency edge `email -> [username]` in scope `root` means `email`
//! must be generated after `username` in the root object, so a custom
//! type generator for `email` can read the generated `username`.
//!
//! ```yaml
//! dependencies:
//!   root:
//!     email: [username]
//!   address:
//!     zip: [city]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scope key of the top-level object.
pub const ROOT_SCOPE: &str = "root";

/// Field name -> fields it must be generated after, for one scope.
pub type ScopeDependencies = HashMap<String, Vec<String>>;

/// Dependency edges for every scope, keyed by scope key.
///
/// Nested scopes are keyed by the name of the field that holds them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyMap {
    scopes: HashMap<String, ScopeDependencies>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `field` depends on `after` in `scope`, builder style.
    pub fn with_dependency<I, S>(mut self, scope: &str, field: &str, after: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dependency in after {
            self.add(scope, field, dependency);
        }
        self
    }

    /// Add a single edge. Duplicate edges are ignored.
    pub fn add(&mut self, scope: &str, field: &str, dependency: impl Into<String>) {
        let dependency = dependency.into();
        let edges = self
            .scopes
            .entry(scope.to_string())
            .or_default()
            .entry(field.to_string())
            .or_default();
        if !edges.contains(&dependency) {
            edges.push(dependency);
        }
    }

    /// Get the edges declared for a scope.
    pub fn scope(&self, scope: &str) -> Option<&ScopeDependencies> {
        self.scopes.get(scope)
    }

    /// True if no scope declares any edge.
    pub fn is_empty(&self) -> bool {
        self.scopes.values().all(|scope| scope.is_empty())
    }
}

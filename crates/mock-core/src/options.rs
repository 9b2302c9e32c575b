//! Partial generation settings.
//!
//! `OptionOverrides` is what a schema document or the command line can set.
//! Every field is optional; unset fields leave the earlier layer alone.

use serde::{Deserialize, Serialize};

/// Settings that override generation defaults field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionOverrides {
    /// Element count for generated arrays
    #[serde(default, alias = "arrayLength")]
    pub array_length: Option<usize>,

    /// Recursion ceiling
    #[serde(default, alias = "maxDepth")]
    pub max_depth: Option<usize>,

    /// Whether reference fields expand to the referenced schema
    #[serde(default, alias = "handleRefs", alias = "handleReferences")]
    pub handle_references: Option<bool>,

    /// Seed for the random number generator
    #[serde(default)]
    pub seed: Option<u64>,
}

impl OptionOverrides {
    /// Layer `later` on top of `self`; fields set in `later` win.
    pub fn merge(self, later: OptionOverrides) -> OptionOverrides {
        OptionOverrides {
            array_length: later.array_length.or(self.array_length),
            max_depth: later.max_depth.or(self.max_depth),
            handle_references: later.handle_references.or(self.handle_references),
            seed: later.seed.or(self.seed),
        }
    }
}

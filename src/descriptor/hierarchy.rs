//! Injected super-method resolution capability
//!
//! Type-hierarchy resolution belongs to the host; the generator only needs
//! the already-resolved set of ancestor methods with a compatible signature.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::MethodDescriptor;

/// Reference to a method declared in an ancestor type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRef {
    /// Type that declares the super method
    pub declaring_type: String,

    /// Method name
    pub name: String,
}

impl MethodRef {
    pub fn new(declaring_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            name: name.into(),
        }
    }
}

/// Host-provided lookup of overridden methods
pub trait HierarchyResolver {
    /// Ancestor methods with a signature compatible with `method`.
    /// An empty set means the method overrides nothing.
    fn super_methods(&self, method: &MethodDescriptor) -> Vec<MethodRef>;
}

/// Resolver for hosts without hierarchy information; nothing overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHierarchy;

impl HierarchyResolver for NoHierarchy {
    fn super_methods(&self, _method: &MethodDescriptor) -> Vec<MethodRef> {
        Vec::new()
    }
}

/// Map-backed resolver for hosts with precomputed hierarchies.
///
/// Entries are keyed by method name and arity; signature compatibility
/// beyond that is the host's job when it records the override.
#[derive(Debug, Clone, Default)]
pub struct StaticHierarchy {
    supers: HashMap<(String, usize), Vec<MethodRef>>,
}

impl StaticHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name`/`arity` overrides `super_method`
    pub fn record_override(&mut self, name: &str, arity: usize, super_method: MethodRef) {
        self.supers
            .entry((name.to_string(), arity))
            .or_default()
            .push(super_method);
    }
}

impl HierarchyResolver for StaticHierarchy {
    fn super_methods(&self, method: &MethodDescriptor) -> Vec<MethodRef> {
        self.supers
            .get(&(method.name.clone(), method.parameters.len()))
            .cloned()
            .unwrap_or_default()
    }
}

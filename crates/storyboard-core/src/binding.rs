//! Resolver trait mapping canonical target paths to value slots.
//!
//! Stored storyboards name their interpolation targets by path. Hosts
//! implement `TargetResolver` (or use the map-backed `TargetRegistry`) to
//! hand the builder the actual slots those paths animate.

use std::collections::HashMap;

use crate::target::Target;
use crate::value::Value;

/// Trait for resolving canonical target paths to write slots.
pub trait TargetResolver {
    fn resolve(&mut self, path: &str) -> Option<Target<Value>>;
}

/// Simple path → slot registry; the common resolver for hosts that keep
/// their animatable state in named slots.
#[derive(Default)]
pub struct TargetRegistry {
    slots: HashMap<String, Target<Value>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot seeded with `initial`, register it under `path`, and
    /// return a handle for the caller to keep.
    pub fn register(&mut self, path: impl Into<String>, initial: Value) -> Target<Value> {
        let slot = Target::new(initial);
        self.slots.insert(path.into(), slot.clone());
        slot
    }

    /// Register an existing slot under `path`.
    pub fn insert(&mut self, path: impl Into<String>, slot: Target<Value>) {
        self.slots.insert(path.into(), slot);
    }

    pub fn get(&self, path: &str) -> Option<Target<Value>> {
        self.slots.get(path).cloned()
    }
}

impl TargetResolver for TargetRegistry {
    fn resolve(&mut self, path: &str) -> Option<Target<Value>> {
        self.slots.get(path).cloned()
    }
}

//! style::memory
//!
//! Deterministic in-memory style source for tests and demos.

use std::collections::HashMap;

use super::StyleSource;
use crate::tree::{Element, ElementId};

/// An in-memory [`StyleSource`] keyed by element id.
///
/// Stores explicit `(element, property) -> value` entries; anything not
/// set resolves to `None`, the same shape a host exposes for properties
/// without a computed value.
#[derive(Debug, Default)]
pub struct MemoryStyles {
    values: HashMap<(ElementId, String), String>,
}

impl MemoryStyles {
    /// Create an empty style source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolved value of `property` for `element`.
    pub fn set(&mut self, element: ElementId, property: &str, value: &str) {
        self.values
            .insert((element, property.to_string()), value.to_string());
    }
}

impl StyleSource<Element<'_>> for MemoryStyles {
    fn computed_value(&self, node: &Element<'_>, property: &str) -> Option<String> {
        self.values
            .get(&(node.id(), property.to_string()))
            .cloned()
    }
}

//! Caller-owned elements the geometry functions read but never mutate

use std::fmt;

use crate::math::Vector3;

/// Opaque handle the host uses to map results back onto its own objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element placed in space, optionally nested under another element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedElement {
    /// Host identifier
    pub id: ElementId,
    /// World position
    pub position: Vector3,
    /// Direct parent, if any
    pub parent: Option<ElementId>,
}

impl PositionedElement {
    /// Create a root-level element
    pub const fn new(id: u64, position: Vector3) -> Self {
        Self {
            id: ElementId(id),
            position,
            parent: None,
        }
    }

    /// Attach the element under `parent`
    #[must_use]
    pub const fn with_parent(mut self, parent: ElementId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Check whether `self` is the direct parent of `other`
    pub fn is_parent_of(&self, other: &Self) -> bool {
        other.parent == Some(self.id)
    }

    /// Check for a direct parent/child link in either direction
    pub fn is_related_to(&self, other: &Self) -> bool {
        self.is_parent_of(other) || other.is_parent_of(self)
    }
}

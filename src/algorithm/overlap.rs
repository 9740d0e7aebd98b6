//! Duplicate detection among elements sharing an identical position
//!
//! Elements are visited in slice order. The first element seen at a position
//! becomes that position's anchor and is kept; every later element at the
//! same position is overlapped and should be excluded by the host. A direct
//! parent and child are never grouped together, even when they coincide.
//!
//! Positions are compared with exact float equality. Near-duplicates left
//! behind by floating drift stay separate.

use std::collections::HashMap;

use bitvec::prelude::*;
use log::debug;

use crate::spatial::element::{ElementId, PositionedElement};

/// One anchor and the elements stacked on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapGroup {
    /// Element kept at the position
    pub anchor: ElementId,
    /// Elements to exclude, in input order
    pub overlapped: Vec<ElementId>,
}

/// Result of overlap grouping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlapReport {
    /// Groups with at least one overlapped element, ordered by anchor
    pub groups: Vec<OverlapGroup>,
    /// `(element, anchor)` in the order elements were visited
    assignments: Vec<(ElementId, ElementId)>,
}

impl OverlapReport {
    /// Every overlapped element paired with the anchor it overlaps
    pub fn overlapped(&self) -> impl Iterator<Item = (ElementId, ElementId)> {
        self.assignments.iter().copied()
    }

    /// Number of elements to exclude
    pub const fn excluded_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether `id` was found overlapping an anchor
    pub fn is_overlapped(&self, id: ElementId) -> bool {
        self.assignments.iter().any(|&(element, _)| element == id)
    }

    /// Anchor that `id` overlaps, if any
    pub fn anchor_of(&self, id: ElementId) -> Option<ElementId> {
        self.assignments
            .iter()
            .find(|&&(element, _)| element == id)
            .map(|&(_, anchor)| anchor)
    }
}

/// Group elements that occupy the exact same position
pub fn find_overlap_groups(elements: &[PositionedElement]) -> OverlapReport {
    let mut anchors: BitVec = bitvec![0; elements.len()];
    let mut assignments = Vec::new();
    // anchor index -> overlapped ids
    let mut stacked: HashMap<usize, Vec<ElementId>> = HashMap::new();

    for (index, element) in elements.iter().enumerate() {
        let anchor = anchors.iter_ones().find(|&candidate| {
            elements.get(candidate).is_some_and(|anchor| {
                anchor.position == element.position && !anchor.is_related_to(element)
            })
        });

        match anchor.and_then(|candidate| Some((candidate, elements.get(candidate)?))) {
            Some((anchor_index, anchor)) => {
                assignments.push((element.id, anchor.id));
                stacked.entry(anchor_index).or_default().push(element.id);
            }
            None => anchors.set(index, true),
        }
    }

    let groups = anchors
        .iter_ones()
        .filter_map(|anchor_index| {
            let overlapped = stacked.remove(&anchor_index)?;
            Some(OverlapGroup {
                anchor: elements.get(anchor_index)?.id,
                overlapped,
            })
        })
        .collect();

    debug!("{} overlapped elements found", assignments.len());
    OverlapReport {
        groups,
        assignments,
    }
}

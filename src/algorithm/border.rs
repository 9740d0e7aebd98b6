//! Border versus interior classification
//!
//! An element is interior only when a neighbour is present on all four
//! planar sides. Interior cells can be switched off by the host (for
//! example their 2-D colliders); border cells must stay active.
//!
//! Spatial lookup is not done here. The host injects a [`Probe`] that
//! answers "is something there" for one element and direction, and any
//! failure it reports is passed back untouched.

use log::debug;

use crate::io::configuration::BORDER_PROBE_RATIO;
use crate::math::Direction;
use crate::spatial::element::PositionedElement;
use crate::spatial::grid::GridConfig;
use crate::spatial::tiles::AdjacencyMask;

/// Presence test supplied by the host
pub trait Probe {
    /// Failure of the underlying spatial query
    type Error;

    /// Report whether another element lies within `distance` of `element` along `direction`
    ///
    /// Implementations must ignore `element` itself.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the spatial query cannot be answered
    fn occupied(
        &self,
        element: &PositionedElement,
        direction: Direction,
        distance: f32,
    ) -> Result<bool, Self::Error>;
}

impl<F, E> Probe for F
where
    F: Fn(&PositionedElement, Direction, f32) -> Result<bool, E>,
{
    type Error = E;

    fn occupied(
        &self,
        element: &PositionedElement,
        direction: Direction,
        distance: f32,
    ) -> Result<bool, E> {
        self(element, direction, distance)
    }
}

/// Outcome of the four-neighbour test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderClass {
    /// Surrounded on all four sides, safe to deactivate
    Interior,
    /// Missing at least one neighbour, must remain active
    Border,
}

impl BorderClass {
    /// Whether the element must remain active
    pub const fn is_border(self) -> bool {
        matches!(self, Self::Border)
    }
}

/// Probe distance for a grid: half a cell, stretched by [`BORDER_PROBE_RATIO`]
pub fn border_probe_distance(config: &GridConfig) -> f32 {
    config.extent() * BORDER_PROBE_RATIO
}

/// Probe all four sides of one element
///
/// # Errors
///
/// Propagates the first probe failure
pub fn adjacency_mask<P: Probe + ?Sized>(
    element: &PositionedElement,
    distance: f32,
    probe: &P,
) -> Result<AdjacencyMask, P::Error> {
    let mut mask = AdjacencyMask::default();
    for direction in Direction::ALL {
        mask.set(direction, probe.occupied(element, direction, distance)?);
    }
    Ok(mask)
}

/// Classify every element as interior or border, in input order
///
/// Returns an empty result for an invalid grid or an empty slice.
///
/// # Errors
///
/// Propagates the first probe failure unchanged
pub fn classify_borders<P: Probe + ?Sized>(
    elements: &[PositionedElement],
    config: &GridConfig,
    probe: &P,
) -> Result<Vec<BorderClass>, P::Error> {
    if !config.is_valid() {
        return Ok(Vec::new());
    }
    classify_borders_with_distance(elements, border_probe_distance(config), probe)
}

/// Classify with an explicit probe distance
///
/// # Errors
///
/// Propagates the first probe failure unchanged
pub fn classify_borders_with_distance<P: Probe + ?Sized>(
    elements: &[PositionedElement],
    distance: f32,
    probe: &P,
) -> Result<Vec<BorderClass>, P::Error> {
    let mut classes = Vec::with_capacity(elements.len());

    for element in elements {
        let mut surrounded = true;
        for direction in Direction::ALL {
            if !probe.occupied(element, direction, distance)? {
                surrounded = false;
                break;
            }
        }
        classes.push(if surrounded {
            BorderClass::Interior
        } else {
            BorderClass::Border
        });
    }

    let interior = classes.iter().filter(|class| !class.is_border()).count();
    debug!(
        "{interior} of {} elements are interior and can be turned off",
        classes.len()
    );
    Ok(classes)
}

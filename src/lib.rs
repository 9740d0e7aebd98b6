//! Grid geometry for scene editing tools
//!
//! Snaps positions to a virtual grid, finds elements stacked on the same
//! spot, tells border cells from interior ones through host-supplied probes,
//! and classifies cells into autotile variants from their four neighbours.
//! Every function reads caller-owned elements and returns results for the
//! host to apply; nothing here mutates the host's scene.

#![forbid(unsafe_code)]

/// Overlap grouping, border detection, naming, selection and tiling
pub mod algorithm;
/// Layout I/O, configuration and error handling
pub mod io;
/// Vectors, directions and snap quantization
pub mod math;
/// Elements, grids, occupancy, tiles and ground
pub mod spatial;

pub use io::error::{GridError, Result};
pub use math::Vector3;
pub use math::snap::snap;
pub use spatial::element::{ElementId, PositionedElement};

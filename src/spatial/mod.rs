//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Positioned elements and their parent links
//! - Grid configuration, auto snapping and the grid registry
//! - Cell occupancy for adjacency probing
//! - Autotile classes and the adjacency decision table
//! - Ground side extraction and growth

/// Caller-owned positioned elements
pub mod element;
/// Grid configuration and host-driven snapping
pub mod grid;
/// Ground sides, corners and grow/reduce targets
pub mod ground;
/// Dense cell occupancy implementing the adjacency probe
pub mod occupancy;
/// Explicit registry of live grids
pub mod registry;
/// Adjacency masks and tile classification
pub mod tiles;

pub use element::{ElementId, PositionedElement};
pub use grid::{Grid, GridConfig};

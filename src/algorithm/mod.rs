/// Border versus interior classification through injected probes
pub mod border;
/// Sequential zero-padded naming
pub mod naming;
/// Duplicate grouping by exact position
pub mod overlap;
/// Connected sibling selection and directional filters
pub mod selection;
/// Seeded autotiling of cell layouts
pub mod tiler;

pub use border::{BorderClass, Probe, classify_borders};
pub use overlap::{OverlapReport, find_overlap_groups};

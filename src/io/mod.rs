/// Command-line interface and batch file processing
pub mod cli;
/// Geometry constants and runtime defaults
pub mod configuration;
/// Error types for layout I/O
pub mod error;
/// PNG layout loading and map rendering
pub mod layout;
/// Batch progress display
pub mod progress;

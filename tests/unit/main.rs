//! Unit tests mirroring the `src/` tree file by file

mod algorithm;
mod math;

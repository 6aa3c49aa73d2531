//! dirc: writes a placeholder Git index fixture
//!
//! The crate is split the same way a repository is:
//!
//! - `areas`: on-disk locations (the repository root and its index file)
//! - `artifacts`: the binary structures written into those locations
//! - `commands`: operations composed from the two

pub mod areas;
pub mod artifacts;
pub mod commands;

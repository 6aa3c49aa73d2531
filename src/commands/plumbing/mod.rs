//! Plumbing commands (low-level index operations)
//!
//! ## Commands
//!
//! - `write-index`: Write a single placeholder entry to `.git/index`

pub mod write_index;

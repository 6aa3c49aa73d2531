//! Repository locations
//!
//! - `index`: the `.git/index` file and the entry it holds
//! - `repository`: the working directory root and the output writer

pub(crate) mod index;
pub mod repository;

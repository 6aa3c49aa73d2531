//! Command implementations
//!
//! - `plumbing`: writes the fixture index directly
//! - `porcelain`: lays out the repository skeleton around it

pub mod plumbing;
pub mod porcelain;

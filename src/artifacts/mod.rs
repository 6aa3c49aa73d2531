//! Binary artifacts written by dirc
//!
//! - `index`: index file header, entry record, and padding rules
//! - `objects`: object identifiers and the serialization trait

pub mod index;
pub mod objects;

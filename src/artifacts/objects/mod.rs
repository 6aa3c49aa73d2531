//! Object identifiers
//!
//! Only the identifier itself is needed here: the fixture index stores a
//! placeholder hash in place of a real blob hash, so no objects are ever
//! hashed or written to a database.

pub mod object;
pub mod object_id;

/// Length of an object ID in hexadecimal characters
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an object ID in its binary form
pub const OBJECT_ID_SIZE: usize = OBJECT_ID_LENGTH / 2;

//! Git index file format
//!
//! The index (also called staging area or cache) stores information about the working tree.
//! Only the part of the layout needed for a single placeholder entry is modelled here.
//!
//! ## File Format (Version 2)
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "DIRC" (4 bytes)
//!   - Version: 2 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entry (variable length, padded to 8-byte alignment):
//!   - Metadata: 62 bytes, zeroed
//!   - Object ID: 20 bytes, zeroed
//!   - Path, NUL terminator, then NUL padding
//! ```
//!
//! No trailing checksum is written.

pub mod index_entry;
pub mod index_header;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12; // 4 bytes for marker, 4 for version, 4 for entries_count

/// Magic signature identifying index files
pub const SIGNATURE: &str = "DIRC";

/// Index file format version
pub const VERSION: u32 = 2;

/// Path stored in the fixture entry when no other name is requested
pub const DEFAULT_ENTRY_NAME: &str = "hola.txt";

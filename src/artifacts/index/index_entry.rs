//! Index entry representation
//!
//! A fixture entry carries a real path but no real file state: the metadata
//! block and the object ID are both zero-filled.
//!
//! ## Entry Format
//!
//! ```text
//! metadata (62) | object id (20) | path | NUL | NUL padding
//! ```
//!
//! The whole record, padding included, is a multiple of `ENTRY_BLOCK` bytes
//! and always ends with at least one NUL.

use crate::artifacts::objects::OBJECT_ID_SIZE;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;
use std::io::Write;

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Size of the metadata block preceding the object ID
pub const METADATA_SIZE: usize = 62;

/// Number of NUL bytes needed to bring `unpadded` up to the next `ENTRY_BLOCK` boundary
pub fn padding_len(unpadded: usize) -> usize {
    (ENTRY_BLOCK - unpadded % ENTRY_BLOCK) % ENTRY_BLOCK
}

/// Placeholder for the stat block of an entry
///
/// Stands in for timestamps, device, inode, mode, uid, gid and size.
/// Always zero-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata([u8; METADATA_SIZE]);

impl EntryMetadata {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for EntryMetadata {
    fn default() -> Self {
        EntryMetadata([0; METADATA_SIZE])
    }
}

#[derive(Debug, Clone, new)]
pub struct IndexEntry {
    /// File path relative to repository root
    pub name: String,
    pub oid: ObjectId,
    pub metadata: EntryMetadata,
}

impl IndexEntry {
    /// Build an entry for `name` with zeroed metadata and a zero object ID
    pub fn placeholder(name: &str) -> anyhow::Result<Self> {
        validate_name(name)?;

        Ok(IndexEntry::new(
            name.to_string(),
            ObjectId::zero(),
            EntryMetadata::default(),
        ))
    }

    /// Length of the record up to and including the name terminator
    pub fn unpadded_len(&self) -> usize {
        METADATA_SIZE + OBJECT_ID_SIZE + self.name.len() + 1
    }

    /// Length of the record as written, padding included
    pub fn encoded_len(&self) -> usize {
        let unpadded = self.unpadded_len();
        unpadded + padding_len(unpadded)
    }
}

fn validate_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() {
        return Err(anyhow::anyhow!("Invalid entry name: name is empty"));
    }
    if name.contains('\0') {
        return Err(anyhow::anyhow!(
            "Invalid entry name: {:?} contains a NUL byte",
            name
        ));
    }

    Ok(())
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut entry_bytes = Vec::with_capacity(self.encoded_len());
        entry_bytes.write_all(self.metadata.as_bytes())?;
        self.oid.write_h40_to(&mut entry_bytes)?;
        entry_bytes.write_all(self.name.as_bytes())?;

        // There must be at least one null byte at the end
        entry_bytes.push(0);
        entry_bytes.resize(entry_bytes.len() + padding_len(entry_bytes.len()), 0);

        Ok(Bytes::from(entry_bytes))
    }
}

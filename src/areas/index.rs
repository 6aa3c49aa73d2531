//! Git index file
//!
//! Holds the path of the index file. The file is always rewritten from
//! scratch with exactly one entry: nothing is read back.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::objects::object::Packable;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the index content with a header and `entry`
    ///
    /// # Locking
    ///
    /// Takes an exclusive lock before truncating, and holds it until the
    /// entry is written.
    ///
    /// # Returns
    ///
    /// Number of bytes written
    pub fn write_entry(&self, entry: &IndexEntry) -> anyhow::Result<usize> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;
        debug!(path = %self.path.display(), "locked index file");

        lock.set_len(0)?;

        let header_bytes = IndexHeader::with_entries(1).serialize()?;
        let entry_bytes = entry.serialize()?;
        lock.deref_mut().write_all(&header_bytes)?;
        lock.deref_mut().write_all(&entry_bytes)?;

        Ok(header_bytes.len() + entry_bytes.len())
    }
}

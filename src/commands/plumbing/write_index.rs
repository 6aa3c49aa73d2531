use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use std::fs;
use std::io::Write;
use tracing::{debug, info};

impl Repository {
    /// Write a fixture index holding `entry` as its only entry
    ///
    /// Creates `.git` if needed, overwrites `.git/index`, then prints the
    /// entry name prefixed with a space.
    pub fn write_index(&self, entry: &IndexEntry) -> anyhow::Result<()> {
        let git_path = self.git_path();
        fs::create_dir_all(&git_path)
            .with_context(|| format!("Failed to create {} directory", git_path.display()))?;
        debug!(path = %git_path.display(), "git directory ready");

        let index = self.index();
        let written = index
            .write_entry(entry)
            .with_context(|| format!("Failed to write {}", index.path().display()))?;
        info!(path = %index.path().display(), bytes = written, "index written");

        writeln!(self.writer(), " {}", entry.name)?;

        Ok(())
    }
}

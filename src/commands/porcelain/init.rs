use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use tracing::debug;

const DEFAULT_BRANCH: &str = "main";

impl Repository {
    /// Create `.git/objects`, `.git/refs/heads` and `.git/HEAD`
    ///
    /// An existing `HEAD` is left untouched.
    pub fn init(&self) -> anyhow::Result<()> {
        let git_path = self.git_path();

        fs::create_dir_all(git_path.join("objects"))
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(git_path.join("refs").join("heads"))
            .context("Failed to create .git/refs/heads directory")?;

        let head_path = git_path.join("HEAD");
        if !head_path.exists() {
            fs::write(&head_path, format!("ref: refs/heads/{DEFAULT_BRANCH}\n"))
                .context("Failed to create initial HEAD reference")?;
        }
        debug!(path = %git_path.display(), "repository skeleton ready");

        Ok(())
    }
}

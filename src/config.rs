use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// Squashup configuration values sourced from git config.
#[derive(Debug, Clone)]
pub struct SquashupConfig {
    /// Branch the workflow refuses to run on and diffs against.
    pub protected_branch: String,
    /// Remote pushed to.
    pub remote: String,
    /// Substring identifying the sentinel commit title.
    pub sentinel: String,
    /// Tracked file the marker lives in, relative to the repo root.
    pub file: String,
}

impl Default for SquashupConfig {
    fn default() -> Self {
        Self {
            protected_branch: "main".to_string(),
            remote: "origin".to_string(),
            sentinel: "dummy commit".to_string(),
            file: "README.md".to_string(),
        }
    }
}

impl SquashupConfig {
    /// Load configuration from git config with precedence: local → global → system.
    /// Missing keys fall back to the compiled-in defaults.
    ///
    /// # Errors
    /// Returns an error if repository discovery or reading config fails.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let repo = Repository::discover(repo_root).with_context(|| {
            format!(
                "failed to discover Git repository from {}",
                repo_root.display()
            )
        })?;

        let cfg = repo.config().context("failed to open git config")?;

        let mut out = Self::default();

        if let Ok(v) = cfg.get_string("squashup.protected-branch") {
            out.protected_branch = v;
        }
        if let Ok(v) = cfg.get_string("squashup.remote") {
            out.remote = v;
        }
        if let Ok(v) = cfg.get_string("squashup.sentinel") {
            out.sentinel = v;
        }
        if let Ok(v) = cfg.get_string("squashup.file") {
            out.file = v;
        }

        Ok(out)
    }
}

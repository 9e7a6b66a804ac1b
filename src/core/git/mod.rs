pub mod branch;
pub mod log;
pub mod ops;
pub mod runner;

pub use branch::current_branch;
pub use log::{Commit, NoCommits, commits_between, rebase_steps, sentinel_sha};
pub use runner::{GitRunner, SystemGit};

use std::path::PathBuf;

use anyhow::{Context, Result};
use git2::Repository;

/// Discover the current repository root directory.
pub fn repo_root() -> Result<PathBuf> {
    let repo = Repository::discover(".").context("not inside a Git repository")?;
    let workdir = repo
        .workdir()
        .context("repository has no working directory")?;
    Ok(workdir.to_path_buf())
}

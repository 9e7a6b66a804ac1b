use anyhow::{Result, bail};
use tracing::info;

use super::runner::GitRunner;

/// Stage a single file by path.
///
/// # Errors
/// Returns an error if the invocation fails.
pub fn add(runner: &dyn GitRunner, file: &str) -> Result<()> {
    info!("git: adding {file} file");
    runner.run(&["add", file])
}

/// Create a plain commit with the given message.
///
/// # Errors
/// Returns an error if the invocation fails.
pub fn commit(runner: &dyn GitRunner, message: &str) -> Result<()> {
    info!("git: committing file");
    runner.run(&["commit", "-m", message])
}

/// Create a fixup commit targeting `sha`.
///
/// # Errors
/// Returns an error if `sha` is empty (fixup requires a target) or the
/// invocation fails.
pub fn fixup(runner: &dyn GitRunner, sha: &str) -> Result<()> {
    if sha.is_empty() {
        bail!("cannot create a fixup commit without a target commit");
    }
    info!("git: running commit --fixup on commit {sha}");
    runner.run(&["commit", "--fixup", sha])
}

/// Interactive autosquash rebase over the last `steps` commits. Opens the
/// configured editor; the exit code reflects what the operator did there.
///
/// # Errors
/// Returns an error if the invocation fails.
pub fn rebase_autosquash(runner: &dyn GitRunner, steps: &str) -> Result<()> {
    info!("git: running rebase -i --autosquash on {steps} commits");
    let head = format!("HEAD~{steps}");
    runner.run(&["rebase", "--interactive", "--autosquash", &head])
}

/// Push `branch` to `remote`, setting upstream. `force` uses
/// `--force-with-lease` so an unexpectedly advanced remote aborts the push.
///
/// # Errors
/// Returns an error if the invocation fails.
pub fn push(runner: &dyn GitRunner, remote: &str, branch: &str, force: bool) -> Result<()> {
    info!("git: pushing to {remote} {branch}");
    if force {
        runner.run(&["push", "--set-upstream", "--force-with-lease", remote, branch])
    } else {
        runner.run(&["push", "--set-upstream", remote, branch])
    }
}

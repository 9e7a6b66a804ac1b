use anyhow::{Context, Result};

use super::runner::GitRunner;

/// Read the checked-out branch for the repository. Detached HEAD is an
/// error (`symbolic-ref --quiet` exits non-zero with no output).
///
/// # Errors
/// Returns an error if HEAD is detached or the invocation fails.
pub fn current_branch(runner: &dyn GitRunner) -> Result<String> {
    let output = runner
        .output(&["symbolic-ref", "--quiet", "HEAD"])
        .context("failed to resolve HEAD (detached?)")?;
    Ok(short_branch_name(&output))
}

/// First line of `symbolic-ref` output with the `refs/heads/` prefix
/// stripped.
fn short_branch_name(output: &str) -> String {
    let first = output.lines().next().unwrap_or("");
    first.strip_prefix("refs/heads/").unwrap_or(first).to_string()
}

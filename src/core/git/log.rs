use std::fmt;

use anyhow::Result;

use super::runner::GitRunner;

/// One parsed `git log` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: String,
    pub title: String,
}

/// The cherry-filtered range between two refs contained no commits.
#[derive(Debug)]
pub struct NoCommits {
    pub base: String,
    pub head: String,
}

impl fmt::Display for NoCommits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not find any commits between {} and {}",
            self.base, self.head
        )
    }
}

impl std::error::Error for NoCommits {}

/// List the commits reachable from `head` but not `base`, oldest-to-newest
/// order as git emits it.
///
/// # Errors
/// Returns [`NoCommits`] if the range is empty, or the runner's error if the
/// invocation itself fails.
pub fn commits_between(runner: &dyn GitRunner, base: &str, head: &str) -> Result<Vec<Commit>> {
    let range = format!("{base}...{head}");
    let output = runner.output(&[
        "-c",
        "log.ShowSignature=false",
        "log",
        "--pretty=format:%H,%s",
        "--cherry",
        &range,
    ])?;

    let commits = parse_commits(&output);
    if commits.is_empty() {
        return Err(NoCommits {
            base: base.to_string(),
            head: head.to_string(),
        }
        .into());
    }
    Ok(commits)
}

/// Split each `<hash>,<title>` line on the first comma; malformed lines are
/// skipped.
pub fn parse_commits(output: &str) -> Vec<Commit> {
    output
        .lines()
        .filter_map(|line| {
            let (sha, title) = line.split_once(',')?;
            Some(Commit {
                sha: sha.to_string(),
                title: title.to_string(),
            })
        })
        .collect()
}

/// First commit whose title contains the sentinel substring, if any.
pub fn sentinel_sha<'a>(commits: &'a [Commit], sentinel: &str) -> Option<&'a str> {
    commits
        .iter()
        .find(|c| c.title.contains(sentinel))
        .map(|c| c.sha.as_str())
}

/// Number of commits the autosquash rebase must cover, as a `HEAD~<n>`
/// suffix. One more than the branch's commits to include the fixup commit
/// created just before the rebase.
pub fn rebase_steps(commits: &[Commit]) -> String {
    (commits.len() + 1).to_string()
}

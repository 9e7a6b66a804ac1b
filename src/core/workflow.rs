use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::config::SquashupConfig;
use crate::core::git::{self, GitRunner, ops};
use crate::core::marker::{self, DUMMY_MARKER};

/// Run the whole squashup workflow against the repository at `repo_root`:
/// toggle the marker, find or create the sentinel commit, fold the change
/// into it with a fixup, autosquash-rebase, and force-push with lease.
///
/// Strictly sequential; the first failing step halts the run. There is no
/// rollback, so a failure mid-way can leave staged or committed state behind.
///
/// # Errors
/// Returns an error if any step fails, including running on the protected
/// branch and an empty commit range.
pub fn run_workflow(runner: &dyn GitRunner, cfg: &SquashupConfig, repo_root: &Path) -> Result<()> {
    let branch = git::current_branch(runner)?;
    if branch == cfg.protected_branch {
        bail!(
            "refusing to run on protected branch {}; check out a feature branch first",
            cfg.protected_branch
        );
    }

    let file_path = repo_root.join(&cfg.file);
    let written = marker::toggle(&file_path, &DUMMY_MARKER)
        .with_context(|| format!("failed to toggle marker in {}", cfg.file))?;
    info!("file: {written} bytes written to {}", cfg.file);

    let mut commits = git::commits_between(runner, &cfg.protected_branch, &branch)?;
    let mut sentinel = git::sentinel_sha(&commits, &cfg.sentinel).map(String::from);

    if let Some(sha) = &sentinel {
        info!("{} found {sha}", cfg.sentinel);
    } else {
        info!("no {} present in the current branch", cfg.sentinel);
        info!("adding {} to current branch", cfg.sentinel);
        ops::add(runner, &cfg.file)?;
        ops::commit(runner, &cfg.sentinel)?;
        ops::push(runner, &cfg.remote, &branch, false)?;

        // Re-list so the fixup targets the commit just created.
        commits = git::commits_between(runner, &cfg.protected_branch, &branch)?;
        sentinel = git::sentinel_sha(&commits, &cfg.sentinel).map(String::from);
    }

    let Some(sha) = sentinel else {
        bail!(
            "no commit titled with {:?} found even after creating one",
            cfg.sentinel
        );
    };

    ops::add(runner, &cfg.file)?;
    ops::fixup(runner, &sha)?;
    ops::rebase_autosquash(runner, &git::rebase_steps(&commits))?;
    ops::push(runner, &cfg.remote, &branch, true)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs;

    use super::*;
    use crate::core::git::NoCommits;

    /// Fake runner: scripted stdout per argument vector, records every
    /// invocation in order.
    #[derive(Default)]
    struct RecordingRunner {
        outputs: RefCell<HashMap<Vec<String>, Vec<String>>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingRunner {
        fn script(&self, args: &[&str], outputs: &[&str]) {
            self.outputs.borrow_mut().insert(
                args.iter().map(ToString::to_string).collect(),
                outputs.iter().rev().map(ToString::to_string).collect(),
            );
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl GitRunner for RecordingRunner {
        fn output(&self, args: &[&str]) -> Result<String> {
            let key: Vec<String> = args.iter().map(ToString::to_string).collect();
            self.calls.borrow_mut().push(key.clone());
            let mut outputs = self.outputs.borrow_mut();
            let scripted = outputs
                .get_mut(&key)
                .and_then(Vec::pop)
                .unwrap_or_default();
            Ok(scripted)
        }

        fn run(&self, args: &[&str]) -> Result<()> {
            self.calls
                .borrow_mut()
                .push(args.iter().map(ToString::to_string).collect());
            Ok(())
        }
    }

    fn test_repo() -> (tempfile::TempDir, SquashupConfig) {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::write(tmp.path().join("README.md"), "# project\n").expect("write readme");
        (tmp, SquashupConfig::default())
    }

    const LOG_ARGS: [&str; 6] = [
        "-c",
        "log.ShowSignature=false",
        "log",
        "--pretty=format:%H,%s",
        "--cherry",
        "main...feature-x",
    ];

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn refuses_protected_branch() {
        let (tmp, cfg) = test_repo();
        let runner = RecordingRunner::default();
        runner.script(&["symbolic-ref", "--quiet", "HEAD"], &["refs/heads/main\n"]);

        let err = run_workflow(&runner, &cfg, tmp.path()).unwrap_err();
        assert!(err.to_string().contains("protected branch main"));
        // Nothing beyond the branch lookup may run.
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn empty_commit_range_halts_the_run() {
        let (tmp, cfg) = test_repo();
        let runner = RecordingRunner::default();
        runner.script(
            &["symbolic-ref", "--quiet", "HEAD"],
            &["refs/heads/feature-x\n"],
        );
        runner.script(&LOG_ARGS, &[""]);

        let err = run_workflow(&runner, &cfg, tmp.path()).unwrap_err();
        let no_commits = err.downcast_ref::<NoCommits>().expect("NoCommits");
        assert_eq!(no_commits.base, "main");
        assert_eq!(no_commits.head, "feature-x");

        // The marker toggle already happened; no commit/push may follow.
        assert!(
            !runner
                .calls()
                .iter()
                .any(|c| c.first().is_some_and(|a| a == "push"))
        );
    }

    #[test]
    fn existing_sentinel_goes_straight_to_fixup() {
        let (tmp, cfg) = test_repo();
        let runner = RecordingRunner::default();
        runner.script(
            &["symbolic-ref", "--quiet", "HEAD"],
            &["refs/heads/feature-x\n"],
        );
        runner.script(&LOG_ARGS, &["abc123,fix bug\ndef456,dummy commit\n"]);

        run_workflow(&runner, &cfg, tmp.path()).expect("workflow");

        let calls = runner.calls();
        assert_eq!(
            calls,
            vec![
                argv(&["symbolic-ref", "--quiet", "HEAD"]),
                argv(&LOG_ARGS),
                argv(&["add", "README.md"]),
                argv(&["commit", "--fixup", "def456"]),
                argv(&["rebase", "--interactive", "--autosquash", "HEAD~3"]),
                argv(&[
                    "push",
                    "--set-upstream",
                    "--force-with-lease",
                    "origin",
                    "feature-x",
                ]),
            ]
        );
    }

    #[test]
    fn missing_sentinel_is_created_then_fixed_up() {
        let (tmp, cfg) = test_repo();
        let runner = RecordingRunner::default();
        runner.script(
            &["symbolic-ref", "--quiet", "HEAD"],
            &["refs/heads/feature-x\n"],
        );
        // First listing has no sentinel; after commit+push the re-listing does.
        runner.script(
            &LOG_ARGS,
            &[
                "abc123,fix bug\n",
                "abc123,fix bug\nfff999,dummy commit\n",
            ],
        );

        run_workflow(&runner, &cfg, tmp.path()).expect("workflow");

        let calls = runner.calls();
        assert_eq!(
            calls,
            vec![
                argv(&["symbolic-ref", "--quiet", "HEAD"]),
                argv(&LOG_ARGS),
                argv(&["add", "README.md"]),
                argv(&["commit", "-m", "dummy commit"]),
                argv(&["push", "--set-upstream", "origin", "feature-x"]),
                argv(&LOG_ARGS),
                argv(&["add", "README.md"]),
                argv(&["commit", "--fixup", "fff999"]),
                argv(&["rebase", "--interactive", "--autosquash", "HEAD~3"]),
                argv(&[
                    "push",
                    "--set-upstream",
                    "--force-with-lease",
                    "origin",
                    "feature-x",
                ]),
            ]
        );
    }

    #[test]
    fn workflow_toggles_the_tracked_file() {
        let (tmp, cfg) = test_repo();
        let runner = RecordingRunner::default();
        runner.script(
            &["symbolic-ref", "--quiet", "HEAD"],
            &["refs/heads/feature-x\n"],
        );
        runner.script(&LOG_ARGS, &["def456,dummy commit\n"]);

        run_workflow(&runner, &cfg, tmp.path()).expect("workflow");

        let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(readme.contains("<!-- dummy commit: on -->"));
    }
}

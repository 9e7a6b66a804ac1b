use std::io::ErrorKind;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow, bail};

/// Process execution seam for the git binary.
///
/// The workflow driver only talks to this trait, so tests can substitute a
/// recording fake instead of spawning real processes.
pub trait GitRunner {
    /// Run git with the given arguments and return captured stdout.
    /// A non-zero exit surfaces the tool's stderr verbatim.
    ///
    /// # Errors
    /// Returns an error if git cannot be spawned or exits non-zero.
    fn output(&self, args: &[&str]) -> Result<String>;

    /// Run git with inherited stdio (commit, rebase -i, push all want a
    /// terminal). Blocks until the child exits.
    ///
    /// # Errors
    /// Returns an error if git cannot be spawned or exits non-zero.
    fn run(&self, args: &[&str]) -> Result<()>;
}

/// Runner backed by the real `git` executable on PATH.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

fn spawn_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == ErrorKind::NotFound {
        anyhow!("unable to find git executable in PATH, please install git before retrying")
    } else {
        anyhow::Error::new(err).context("failed to spawn git")
    }
}

impl GitRunner for SystemGit {
    fn output(&self, args: &[&str]) -> Result<String> {
        let out = Command::new("git")
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(spawn_error)?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            bail!(
                "git {} failed ({}): {}",
                args.join(" "),
                out.status,
                stderr.trim()
            );
        }

        String::from_utf8(out.stdout).context("git produced non-UTF-8 output")
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let status = Command::new("git")
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(spawn_error)?;

        if !status.success() {
            bail!("git {} exited with {}", args.join(" "), status);
        }
        Ok(())
    }
}

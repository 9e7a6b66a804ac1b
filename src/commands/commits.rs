use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::git::{self, SystemGit};

pub struct CommitsCommand;

impl Command for CommitsCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let branch = git::current_branch(&SystemGit)?;
        let commits = git::commits_between(&SystemGit, &ctx.cfg.protected_branch, &branch)?;
        for commit in &commits {
            println!("{} {}", commit.sha, commit.title);
        }
        Ok(())
    }
}

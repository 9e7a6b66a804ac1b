use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::git::SystemGit;
use crate::core::workflow::run_workflow;

pub struct RunCommand;

impl Command for RunCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        run_workflow(&SystemGit, &ctx.cfg, &ctx.repo_root)
    }
}

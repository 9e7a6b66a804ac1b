use anyhow::{Context, Result};

use super::Command;
use crate::app::context::AppContext;
use crate::core::marker::{self, DUMMY_MARKER};

pub struct ToggleCommand;

impl Command for ToggleCommand {
    fn run(&self, ctx: &AppContext) -> Result<()> {
        let path = ctx.repo_root.join(&ctx.cfg.file);
        let written = marker::toggle(&path, &DUMMY_MARKER)
            .with_context(|| format!("failed to toggle marker in {}", ctx.cfg.file))?;
        println!("{written} bytes written to {}", ctx.cfg.file);
        Ok(())
    }
}

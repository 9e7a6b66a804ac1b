use anyhow::Result;

use crate::{
    app::context::AppContext,
    cli::{Cli, Commands},
};

pub mod commits;
pub mod run;
pub mod toggle;

/// Unified interface implemented by each subcommand handler.
pub trait Command {
    /// Execute the subcommand.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    fn run(&self, ctx: &AppContext) -> Result<()>;
}

/// Central dispatcher: routes parsed CLI to subcommand handlers.
///
/// # Errors
/// Returns an error if the invoked subcommand fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_repo(cli.verbose)?;

    match &cli.command {
        Commands::Run => run::RunCommand.run(&ctx),
        Commands::Toggle => toggle::ToggleCommand.run(&ctx),
        Commands::Commits => commits::CommitsCommand.run(&ctx),
    }
}

use anyhow::Result;
use clap::Parser;
use git_squashup::cli::Cli;
use git_squashup::commands::dispatch;
use git_squashup::logging::init::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    dispatch(&cli)
}

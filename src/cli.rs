use clap::{ArgAction, Parser, Subcommand};

/// git-squashup command-line interface
#[derive(Parser, Debug, Clone)]
#[command(name = "git-squashup", version, about = "Fold README marker churn into a single dummy commit via fixup + autosquash", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Toggle the marker, fixup into the dummy commit, autosquash, force-push
    Run,

    /// Toggle the README marker and print the number of bytes written
    Toggle,

    /// List the commits between the protected branch and the current branch
    Commits,
}

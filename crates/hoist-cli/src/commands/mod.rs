//! Command dispatch and handler modules.

mod build;
mod publish;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Build => build::exec(cli.verbose),
        Command::Publish { dry_run } => publish::exec(dry_run, cli.verbose).await,
    }
}

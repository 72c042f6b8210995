//! CLI argument definitions for hoist.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hoist",
    version,
    about = "Build a JVM library and publish it to a Maven repository",
    long_about = "hoist compiles a Java library project and publishes its primary JAR and \
                  sources JAR to a Maven repository, resolving credentials from the \
                  environment and the project's build properties."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the project and package the primary and sources JARs
    Build,

    /// Build and upload the artifacts to the configured repository
    Publish {
        /// Resolve everything but upload nothing
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parse the process arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

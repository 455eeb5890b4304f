//! Command-line interface.

pub mod backends;
pub mod generate;
pub mod inspect;

use crate::config::XmlinferConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "xmlinfer")]
#[command(about = "Infer typed XML bindings from a sample document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file applied on top of the global and project config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Infer types from a sample document and write them out
    Generate(generate::GenerateArgs),
    /// Print the inferred schema without writing anything
    Inspect(inspect::InspectArgs),
    /// List available output backends
    Backends,
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let root = std::env::current_dir()?;
    let config = XmlinferConfig::load(&root, cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => generate::run(args, config),
        Command::Inspect(args) => inspect::run(args),
        Command::Backends => backends::run(),
    }
}

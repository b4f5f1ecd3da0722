mod bake;
mod check;

use std::path::PathBuf;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use droute_manifest::Options;
use eyre::Result;

use crate::{logging, ops::Inputs};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for droute_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "droute")]
#[command(version)]
#[command(about = "Generate route lookup modules from action declarations")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);

        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the route table and write the generated module
    Bake(BakeCommand),

    /// Validate action declarations without generating code
    Check(CheckCommand),
}

/// Where declarations and options come from.
#[derive(Args)]
pub struct InputArgs {
    /// Path to a routes.toml manifest
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Java source root to scan for @Action annotations (repeatable)
    #[arg(short, long = "src", value_name = "DIR")]
    pub sources: Vec<PathBuf>,

    /// Processor option such as -AmoduleName=login; overrides the manifest (repeatable)
    #[arg(
        short = 'A',
        value_name = "KEY=VALUE",
        value_parser = parse_option
    )]
    pub options: Vec<(String, String)>,
}

impl InputArgs {
    pub fn inputs(&self) -> Inputs<'_> {
        Inputs {
            manifest: self.manifest.as_deref(),
            sources: &self.sources,
            options: self.options.iter().cloned().collect::<Options>(),
        }
    }
}

fn parse_option(arg: &str) -> std::result::Result<(String, String), String> {
    Options::parse_assignment(arg).map_err(|e| e.to_string())
}

//! CFM - Entry Point
//!
//! Inspects the dependency plan of a set of assemblies described in a
//! manifest. Lives in the `cfm` facade crate next to the library.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cfm plan --manifest <file>` | Print startup order and parallel levels |
//! | `cfm plan --manifest <file> --json` | Same, as JSON |
//! | `cfm check --manifest <file>` | Print `ok` if the plan resolves |

use anyhow::Context;
use cfm::manifest::Manifest;
use cfm_infrastructure::{ConfigLoader, bootstrap};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for CFM
#[derive(Parser, Debug)]
#[command(name = "cfm")]
#[command(about = "CFM - Dependency-ordered component assembly")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the startup order and parallel levels for a manifest
    Plan {
        #[command(flatten)]
        common: CommonArgs,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve a manifest and print `ok` if it is consistent
    Check {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Path to the assembly manifest
    #[arg(short, long)]
    manifest: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Install the configured log subscriber (logs go to stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn resolve(common: &CommonArgs) -> anyhow::Result<cfm::AssemblyPlan> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &common.config {
        loader = loader.with_config_path(path);
    }
    let mut boot = bootstrap(&loader, common.verbose)?;

    Manifest::load(&common.manifest)?.register_all(&mut boot.assembler)?;
    Ok(boot.assembler.plan()?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Plan { common, json } => {
            let plan = resolve(&common)?;
            if json {
                let rendered =
                    serde_json::to_string_pretty(&plan).context("Failed to render plan")?;
                println!("{rendered}");
            } else {
                print!("{plan}");
            }
        }
        Command::Check { common } => {
            resolve(&common)?;
            println!("ok");
        }
    }
    Ok(())
}

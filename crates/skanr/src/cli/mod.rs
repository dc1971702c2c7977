//! Command line interface
//!
//! Configuration is loaded first so logging can be initialized from it; each
//! subcommand then writes its primary output to stdout and logs to stderr.

pub mod dialects;
pub mod generate;
pub mod plan;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skanr_infrastructure::logging::init_logging;
use skanr_infrastructure::{AppConfig, ConfigLoader};

pub use generate::{GenerateArgs, GenerateSummary, generate};
pub use plan::{PlanArgs, ReportFormat, plan};

/// Command line interface for Skanr
#[derive(Parser, Debug)]
#[command(name = "skanr")]
#[command(about = "Skanr - Dependency-injection registration generator")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate registration source from one or more manifests
    Generate(GenerateArgs),
    /// Resolve and plan registrations without emitting source
    Plan(PlanArgs),
    /// List the registered emission dialects
    Dialects,
}

/// Load configuration for a CLI invocation
pub fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Run a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Generate(args) => {
            generate(args, &config, &mut out)?;
        }
        Command::Plan(args) => {
            plan(args, &config, &mut out)?;
        }
        Command::Dialects => dialects::list(&mut out)?,
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

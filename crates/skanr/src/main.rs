//! Skanr - Entry Point
//!
//! Binary entry point for the `skanr` command line.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `skanr generate --manifest <path>...` | Emit registration source |
//! | `skanr plan --manifest <path>` | Show planned registrations and diagnostics |
//! | `skanr dialects` | List emission dialects |

use clap::Parser;
use skanr::cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    run(Cli::parse())
}

//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::settings::ConnectConfig;
use crate::core::Zypper;
use commands::Commands;

/// Long version string with build metadata
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    ", ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    ")"
);

/// suseconnect - register a system and manage its zypper configuration
///
/// Lists products, repositories and services, and adds or removes the
/// services and credentials of a registration.
#[derive(Parser, Debug)]
#[command(name = "suseconnect")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Operate on an alternate filesystem root
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(command) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let config = ConnectConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;
        let zypper = Zypper::new(
            config
                .zypper_config(self.root)
                .context("Invalid filesystem root")?,
        );
        tracing::debug!("Using configuration {:?}", zypper.config());

        command.run(&zypper)
    }
}

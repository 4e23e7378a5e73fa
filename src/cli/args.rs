//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tagscan
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan`: Scan a source tree for capitalized tag usages
//! - `init`: Initialize tagscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Comma-separated glob patterns to ignore, applied after config ignores
    /// (e.g. "**/dist/**, *.stories.tsx")
    #[arg(long)]
    pub ignore: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files for capitalized tag usages and their import origins
    Scan(ScanCommand),
    /// Initialize a new .tagscanrc.json configuration file
    Init,
}

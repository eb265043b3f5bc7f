//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - deploy: Deploy command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod deploy;

pub use completions::CompletionsArgs;
pub use deploy::DeployArgs;

/// flatdeploy - runtime deployer for resolved dependencies
///
/// Copy the shared libraries and executables of resolved dependencies into one flat folder.
#[derive(Parser, Debug)]
#[command(
    name = "flatdeploy",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Flatten the runtime binaries of resolved dependencies into one folder",
    long_about = "flatdeploy reads a deployment manifest listing already-resolved dependencies \
                  and copies their shared libraries and executables into a single flat folder, \
                  skipping files that are already up to date.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  flatdeploy deploy deploy.yaml                 \x1b[90m# Deploy into the manifest's output folder\x1b[0m\n   \
                  flatdeploy deploy deploy.yaml -o dist/bin     \x1b[90m# Deploy into dist/bin\x1b[0m\n   \
                  flatdeploy deploy deploy.yaml --dry-run -v    \x1b[90m# Show what would be copied\x1b[0m\n   \
                  flatdeploy patterns                           \x1b[90m# Show the default library patterns\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output (errors are still printed)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy dependency binaries into a flat folder
    Deploy(DeployArgs),

    /// Show the default library file patterns
    Patterns,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

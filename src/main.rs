//! flatdeploy - runtime deployer for resolved dependencies
//!
//! Copies the shared libraries and executables of already-resolved package
//! dependencies into one flat folder, skipping files that are already up to
//! date and reporting what was done per dependency.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod deployer;
mod domain;
mod error;
mod progress;
mod ui;

use cli::{Cli, Commands};
use error::DeployError;

fn report_error(err: &DeployError) {
    eprintln!("Error: {}", err);
    if let Some(help) = err.help() {
        eprintln!("  help: {}", help);
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deploy(args) => commands::deploy::run(args, cli.verbose, cli.quiet),
        Commands::Patterns => commands::patterns::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

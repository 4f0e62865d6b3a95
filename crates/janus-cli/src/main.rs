//! janus CLI
//!
//! Selects an opencode configuration directory based on the working
//! directory and delegates execution, with commands for diagnosing
//! mappings and managing the shell hook.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Exec { args } => commands::run_exec(&args),
        Commands::Test { path, json } => commands::run_test(&path, json).map(|()| 0),
        Commands::Hook { shell } => commands::run_hook(&shell).map(|()| 0),
        Commands::Install { shell } => commands::run_install(shell.as_deref()).map(|()| 0),
        Commands::Uninstall => commands::run_uninstall().map(|()| 0),
    }
}

//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// janus - Per-directory opencode configuration switching
#[derive(Parser, Debug)]
#[command(name = "janus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run opencode with the configuration directory matched from the
    /// current working directory
    ///
    /// Examples:
    ///   janus exec                   # Plain opencode with the matched config
    ///   janus exec -- run --continue # Forward arguments to opencode
    Exec {
        /// Arguments passed through to opencode
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Show which configuration directory a path resolves to
    Test {
        /// Path to test against the configured mappings
        path: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the shell hook function for manual sourcing
    Hook {
        /// Shell to generate the hook for (zsh or bash)
        #[arg(short, long, default_value = "zsh")]
        shell: String,
    },

    /// Install the shell hook into your shell RC file
    ///
    /// Splices a marker-delimited block into .zshrc or .bashrc; run
    /// uninstall to remove it again.
    Install {
        /// Shell whose RC file to modify (defaults to auto-detection)
        #[arg(short, long)]
        shell: Option<String>,
    },

    /// Remove the shell hook from your shell RC file
    Uninstall,
}

//! Shell hook commands: print, install, uninstall

use colored::Colorize;

use crate::error::{CliError, Result};
use janus_core::ShellType;
use janus_core::hook::{
    default_rc_file, generate_hook, install_hook, shell_type_for_rc_file, uninstall_hook,
};

/// Print the hook function body for manual sourcing.
pub fn run_hook(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    println!("{}", generate_hook(shell));
    Ok(())
}

/// Splice the hook block into the shell RC file.
pub fn run_install(shell: Option<&str>) -> Result<()> {
    let shell = shell.map(parse_shell).transpose()?;
    let rc_file = default_rc_file(shell).ok_or_else(home_dir_error)?;
    let shell = shell.unwrap_or_else(|| shell_type_for_rc_file(&rc_file));

    install_hook(&rc_file, shell)?;

    println!(
        "{} Installed {} hook into {}",
        "✓".green(),
        shell,
        rc_file.display()
    );
    println!("Restart your shell or source the file to activate it.");
    Ok(())
}

/// Remove the hook block from the shell RC file.
pub fn run_uninstall() -> Result<()> {
    let rc_file = default_rc_file(None).ok_or_else(home_dir_error)?;

    uninstall_hook(&rc_file)?;

    println!("{} Removed hook from {}", "✓".green(), rc_file.display());
    Ok(())
}

fn home_dir_error() -> CliError {
    CliError::user("Could not determine home directory")
}

fn parse_shell(name: &str) -> Result<ShellType> {
    ShellType::parse(name).ok_or_else(|| {
        CliError::user(format!(
            "Unknown shell: {name} (expected one of: {})",
            ShellType::all_names().join(", ")
        ))
    })
}

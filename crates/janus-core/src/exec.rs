//! Delegated execution of the target executable
//!
//! After resolution, the chosen configuration directory is exported in the
//! child's environment and `opencode` runs with inherited standard streams.
//! The child's exit code is propagated verbatim; an abnormal exit (killed
//! by signal) maps to 1.

use std::process::Command;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::resolver::Resolver;

/// Executable janus delegates to
pub const TARGET_COMMAND: &str = "opencode";

/// Environment variable carrying the chosen configuration directory
pub const CONFIG_DIR_ENV: &str = "OPENCODE_CONFIG_DIR";

/// Spawn `opencode` with the given configuration directory exported.
///
/// Standard streams are inherited, so the child owns the terminal for its
/// lifetime. Returns the child's exit code.
pub fn exec_with_config(config_dir: &str, args: &[String]) -> Result<i32> {
    run_command(TARGET_COMMAND, config_dir, args)
}

/// Resolve `cwd` against the config and run the target.
///
/// A resolution miss (no match, no default) returns exit code 1 without
/// spawning anything.
pub fn exec(cwd: &str, config: &Config, args: &[String]) -> Result<i32> {
    let resolver = Resolver::new();
    match resolver.resolve(cwd, &config.mappings, config.default_config_dir.as_deref()) {
        Some(result) => {
            tracing::debug!(
                config_dir = %result.config_dir,
                pattern = %result.matched_pattern,
                "Resolved configuration directory"
            );
            exec_with_config(&result.config_dir, args)
        }
        None => Ok(1),
    }
}

fn run_command(command: &str, config_dir: &str, args: &[String]) -> Result<i32> {
    let status = Command::new(command)
        .args(args)
        .env(CONFIG_DIR_ENV, config_dir)
        .status()
        .map_err(|source| Error::Spawn {
            command: command.to_string(),
            source,
        })?;

    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mapping;

    #[test]
    fn child_sees_config_dir_env() {
        let code = run_command(
            "sh",
            "/config/a",
            &[
                "-c".to_string(),
                format!("test \"${}\" = /config/a", CONFIG_DIR_ENV),
            ],
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn child_exit_code_is_propagated() {
        let code = run_command("sh", "/config/a", &["-c".to_string(), "exit 7".to_string()])
            .unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn missing_command_is_a_spawn_error() {
        let err = run_command("janus-no-such-command", "/config/a", &[]).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
        assert!(err.to_string().contains("janus-no-such-command"));
    }

    #[test]
    fn resolution_miss_returns_exit_code_one() {
        let config = Config {
            default_config_dir: None,
            mappings: vec![Mapping {
                match_patterns: vec!["/somewhere/else".to_string()],
                config_dir: "/config/else".to_string(),
            }],
        };
        let code = exec("/not/mapped", &config, &[]).unwrap();
        assert_eq!(code, 1);
    }
}

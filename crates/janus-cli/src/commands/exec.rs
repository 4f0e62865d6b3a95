//! The exec command: resolve the cwd and delegate to opencode

use crate::error::Result;

/// Load the config, resolve the current working directory, and run
/// opencode with the matched configuration directory exported.
///
/// Returns the child's exit code; a resolution miss is exit code 1.
pub fn run_exec(args: &[String]) -> Result<i32> {
    let config = janus_core::load_default_config()?;
    let cwd = std::env::current_dir()?;

    let code = janus_core::exec::exec(&cwd.to_string_lossy(), &config, args)?;
    Ok(code)
}

//! Shell hook generation and RC-file management
//!
//! The hook is a marker-delimited block spliced into the user's shell
//! startup file. Install/uninstall only ever touch the text between the
//! sentinel comment markers; everything else in the file is preserved.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Start marker of the managed hook block
pub const HOOK_START_MARKER: &str = "# >>> janus auto-initialization >>>";

/// End marker of the managed hook block
pub const HOOK_END_MARKER: &str = "# <<< janus auto-initialization <<<";

/// Shells janus can install its hook for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Zsh,
    Bash,
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zsh => write!(f, "zsh"),
            Self::Bash => write!(f, "bash"),
        }
    }
}

impl ShellType {
    /// Parse a shell name from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zsh" => Some(Self::Zsh),
            "bash" => Some(Self::Bash),
            _ => None,
        }
    }

    /// List all supported shell names
    pub fn all_names() -> &'static [&'static str] {
        &["zsh", "bash"]
    }
}

/// Generate the hook function body for the given shell.
///
/// The wrapper shadows `opencode` so every invocation goes through
/// `janus exec`, which injects the resolved configuration directory.
pub fn generate_hook(shell: ShellType) -> String {
    match shell {
        // POSIX function syntax, valid in both shells
        ShellType::Zsh | ShellType::Bash => {
            "opencode() {\n  janus exec -- \"$@\"\n}".to_string()
        }
    }
}

/// Pick the RC file to manage under `home`.
///
/// Prefers an existing `.zshrc`, then an existing `.bashrc`; when neither
/// exists, defaults to `.zshrc`.
pub fn detect_rc_file(home: &Path) -> PathBuf {
    let zshrc = home.join(".zshrc");
    if zshrc.is_file() {
        return zshrc;
    }

    let bashrc = home.join(".bashrc");
    if bashrc.is_file() {
        return bashrc;
    }

    zshrc
}

/// RC file name for a shell.
pub fn rc_file_name(shell: ShellType) -> &'static str {
    match shell {
        ShellType::Zsh => ".zshrc",
        ShellType::Bash => ".bashrc",
    }
}

/// RC file for the current user.
///
/// With an explicit shell, the matching RC file under the home directory;
/// otherwise whatever [`detect_rc_file`] picks. `None` when the home
/// directory cannot be determined.
pub fn default_rc_file(shell: Option<ShellType>) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(match shell {
        Some(shell) => home.join(rc_file_name(shell)),
        None => detect_rc_file(&home),
    })
}

/// Infer the shell type from an RC file name.
pub fn shell_type_for_rc_file(rc_file: &Path) -> ShellType {
    match rc_file.file_name().and_then(|n| n.to_str()) {
        Some(".zshrc") => ShellType::Zsh,
        _ => ShellType::Bash,
    }
}

/// Check whether the hook block is present in the RC file.
pub fn is_hook_installed(rc_file: &Path) -> bool {
    std::fs::read_to_string(rc_file)
        .map(|content| content.contains(HOOK_START_MARKER))
        .unwrap_or(false)
}

/// Append the marker-delimited hook block to the RC file.
///
/// Creates the file when it does not exist. Errors with
/// [`Error::HookAlreadyInstalled`] when the start marker is already
/// present.
pub fn install_hook(rc_file: &Path, shell: ShellType) -> Result<()> {
    let existing = match std::fs::read_to_string(rc_file) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };

    if let Some(content) = &existing
        && content.contains(HOOK_START_MARKER)
    {
        return Err(Error::HookAlreadyInstalled {
            path: rc_file.to_path_buf(),
        });
    }

    let block = format!(
        "{}\n{}\n{}\n",
        HOOK_START_MARKER,
        generate_hook(shell),
        HOOK_END_MARKER
    );

    let new_content = match existing {
        Some(content) if content.is_empty() || content.ends_with('\n') => {
            format!("{content}{block}")
        }
        Some(content) => format!("{content}\n{block}"),
        None => block,
    };

    tracing::debug!(?rc_file, %shell, "Installing shell hook");
    std::fs::write(rc_file, new_content)?;
    Ok(())
}

/// Splice the hook block out of the RC file.
///
/// Removes everything from the start marker through the end marker
/// (through end-of-file if the end marker is missing), preserving the
/// rest of the content with a single trailing newline.
pub fn uninstall_hook(rc_file: &Path) -> Result<()> {
    let content = match std::fs::read_to_string(rc_file) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::RcFileNotFound {
                path: rc_file.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let Some(start) = content.find(HOOK_START_MARKER) else {
        return Err(Error::HookNotInstalled {
            path: rc_file.to_path_buf(),
        });
    };

    let span_start = if content[..start].ends_with('\n') {
        start - 1
    } else {
        start
    };

    let mut span_end = content[start..]
        .find(HOOK_END_MARKER)
        .map(|pos| start + pos + HOOK_END_MARKER.len())
        .unwrap_or(content.len());
    if content[span_end..].starts_with('\n') {
        span_end += 1;
    }

    let remainder = format!("{}{}", &content[..span_start], &content[span_end..]);
    let trimmed = remainder.trim();
    let new_content = if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}\n")
    };

    tracing::debug!(?rc_file, "Removing shell hook");
    std::fs::write(rc_file, new_content)?;
    Ok(())
}

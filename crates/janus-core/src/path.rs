//! Tilde expansion and environment-dependent path lookups
//!
//! The resolver only touches the filesystem through the [`PathNormalizer`]
//! trait, so the selection logic stays unit-testable without a real home
//! directory or symlink tree.

use std::path::PathBuf;

/// Environment-dependent path operations used during resolution.
pub trait PathNormalizer {
    /// The current user's home directory, if one can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Canonicalize a path, resolving symlinks.
    ///
    /// Returns `None` when the path does not exist or cannot be resolved.
    /// Failures here are never surfaced as errors; callers treat them as
    /// "no additional candidate path".
    fn canonicalize(&self, path: &str) -> Option<String>;
}

/// [`PathNormalizer`] backed by the real filesystem and user environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNormalizer;

impl PathNormalizer for SystemNormalizer {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn canonicalize(&self, path: &str) -> Option<String> {
        dunce::canonicalize(path)
            .ok()
            .map(|p| p.to_string_lossy().into_owned())
    }
}

/// Expand a leading tilde in a path to the user's home directory.
///
/// Exactly `~` becomes the home directory, and `~/rest` becomes
/// `<home>/rest`. A tilde anywhere else is left untouched, as is the
/// whole path when the home directory is unknown.
///
/// # Example
///
/// ```ignore
/// expand_tilde("~/work/project", &SystemNormalizer); // "/home/user/work/project"
/// expand_tilde("/absolute/path", &SystemNormalizer); // unchanged
/// ```
pub fn expand_tilde(path: &str, normalizer: &impl PathNormalizer) -> String {
    if path.is_empty() {
        return path.to_string();
    }

    if path == "~" || path.starts_with("~/") {
        if let Some(home) = normalizer.home_dir() {
            let home = home.to_string_lossy();
            return format!("{}{}", home, &path[1..]);
        }
    }

    path.to_string()
}

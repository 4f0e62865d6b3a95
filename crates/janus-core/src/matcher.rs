//! Single-pattern path matching
//!
//! Patterns are either plain paths, matched by equality or directory-prefix
//! containment, or carry a `**` marker, matched by string prefix on the text
//! before the first `**`. No other glob syntax is interpreted; existing
//! configs rely on the literal-prefix behavior.

/// Check whether `path` satisfies `pattern`.
///
/// A pattern without `**` matches the identical path and any path below it
/// (`/a/b` matches `/a/b` and `/a/b/c`, but not `/a/bc`). A pattern with
/// `**` matches every path starting with the text before the first `**`;
/// an empty prefix matches everything. The prefix comparison is a plain
/// `starts_with`, so patterns are expected to carry their own trailing
/// separator (`/work/**`, not `/work**`).
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if path.is_empty() || pattern.is_empty() {
        return false;
    }

    match pattern.find("**") {
        None => path == pattern || path.strip_prefix(pattern).is_some_and(|rest| rest.starts_with('/')),
        Some(glob_index) => {
            let prefix = &pattern[..glob_index];
            prefix.is_empty() || path.starts_with(prefix)
        }
    }
}

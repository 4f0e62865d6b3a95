//! Mapping resolution with longest-match selection
//!
//! The [`Resolver`] flattens every mapping's pattern list into candidates,
//! picks the longest matching pattern, and falls back first to the
//! canonicalized (symlink-resolved) path and then to the configured
//! default directory.

use serde::Serialize;

use crate::config::Mapping;
use crate::matcher::matches_pattern;
use crate::path::{PathNormalizer, SystemNormalizer, expand_tilde};

/// Sentinel pattern reported when the default configuration directory is
/// used because nothing matched.
pub const DEFAULT_PATTERN: &str = "(default)";

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The configuration directory to activate
    #[serde(rename = "configDir")]
    pub config_dir: String,

    /// The pattern that won, or [`DEFAULT_PATTERN`] for the default fallback
    #[serde(rename = "matchedPattern")]
    pub matched_pattern: String,
}

/// Resolves a working directory to a configuration directory.
///
/// Resolution is a pure function of its inputs apart from two environment
/// lookups routed through the [`PathNormalizer`]: tilde expansion of the
/// input path, and a single canonicalization retry when the literal path
/// matched nothing. Identical inputs always produce identical results, and
/// nothing is cached between calls.
///
/// Selection policy: candidates are tried in mapping order (then pattern
/// order within a mapping) and the longest matching pattern wins. Length
/// comparison is strict, so of two equal-length matches the one declared
/// first is kept. This equal-length tie-break is declaration-order policy
/// that existing configs depend on, not a specificity heuristic.
#[derive(Debug, Clone, Default)]
pub struct Resolver<N: PathNormalizer = SystemNormalizer> {
    normalizer: N,
}

impl Resolver<SystemNormalizer> {
    /// Create a resolver backed by the real filesystem and environment.
    pub fn new() -> Self {
        Self {
            normalizer: SystemNormalizer,
        }
    }
}

impl<N: PathNormalizer> Resolver<N> {
    /// Create a resolver with a custom normalizer.
    ///
    /// This is primarily useful for testing, where the home directory and
    /// symlink resolution need to be controlled without touching the real
    /// filesystem.
    pub fn with_normalizer(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Resolve `path` against `mappings`.
    ///
    /// Returns `None` only when nothing matches and no default directory
    /// is configured. All absence-of-match situations are values, never
    /// errors; a canonicalization failure (path does not exist, I/O error)
    /// is silently treated as "no additional match".
    pub fn resolve(
        &self,
        path: &str,
        mappings: &[Mapping],
        default_config_dir: Option<&str>,
    ) -> Option<MatchResult> {
        if mappings.is_empty() {
            return default_result(default_config_dir);
        }

        let expanded = expand_tilde(path, &self.normalizer);

        // Flatten into (pattern, configDir) candidates, preserving mapping
        // order and pattern order within each mapping.
        let candidates: Vec<(&str, &str)> = mappings
            .iter()
            .flat_map(|mapping| {
                mapping
                    .match_patterns
                    .iter()
                    .map(move |pattern| (pattern.as_str(), mapping.config_dir.as_str()))
            })
            .collect();

        if let Some(result) = find_best_match(&expanded, &candidates) {
            return Some(result);
        }

        // The literal path matched nothing; retry once against its
        // symlink-resolved form if that differs.
        if let Some(canonical) = self.normalizer.canonicalize(&expanded)
            && canonical != expanded
        {
            tracing::debug!(%expanded, %canonical, "Retrying match against canonicalized path");
            if let Some(result) = find_best_match(&canonical, &candidates) {
                return Some(result);
            }
        }

        default_result(default_config_dir)
    }
}

/// Pick the best candidate for `path`: longest matching pattern, earliest
/// declaration on equal length.
fn find_best_match(path: &str, candidates: &[(&str, &str)]) -> Option<MatchResult> {
    let mut best: Option<(&str, &str)> = None;
    let mut longest = 0usize;

    for &(pattern, config_dir) in candidates {
        // Strict > keeps the first candidate at the maximum length.
        if matches_pattern(path, pattern) && pattern.len() > longest {
            longest = pattern.len();
            best = Some((pattern, config_dir));
        }
    }

    best.map(|(pattern, config_dir)| {
        tracing::debug!(%path, %pattern, %config_dir, "Selected mapping");
        MatchResult {
            config_dir: config_dir.to_string(),
            matched_pattern: pattern.to_string(),
        }
    })
}

fn default_result(default_config_dir: Option<&str>) -> Option<MatchResult> {
    default_config_dir.map(|dir| MatchResult {
        config_dir: dir.to_string(),
        matched_pattern: DEFAULT_PATTERN.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// Normalizer with a fixed home directory and a scripted set of
    /// symlink resolutions.
    struct FakeNormalizer {
        home: Option<PathBuf>,
        links: HashMap<String, String>,
    }

    impl FakeNormalizer {
        fn new() -> Self {
            Self {
                home: Some(PathBuf::from("/home/tester")),
                links: HashMap::new(),
            }
        }

        fn with_link(mut self, from: &str, to: &str) -> Self {
            self.links.insert(from.to_string(), to.to_string());
            self
        }
    }

    impl PathNormalizer for FakeNormalizer {
        fn home_dir(&self) -> Option<PathBuf> {
            self.home.clone()
        }

        fn canonicalize(&self, path: &str) -> Option<String> {
            self.links.get(path).cloned()
        }
    }

    fn resolver() -> Resolver<FakeNormalizer> {
        Resolver::with_normalizer(FakeNormalizer::new())
    }

    fn mapping(patterns: &[&str], config_dir: &str) -> Mapping {
        Mapping {
            match_patterns: patterns.iter().map(|p| p.to_string()).collect(),
            config_dir: config_dir.to_string(),
        }
    }

    fn result(config_dir: &str, pattern: &str) -> MatchResult {
        MatchResult {
            config_dir: config_dir.to_string(),
            matched_pattern: pattern.to_string(),
        }
    }

    #[test]
    fn empty_mappings_without_default_is_none() {
        assert_eq!(resolver().resolve("/anything", &[], None), None);
    }

    #[test]
    fn empty_mappings_with_default_uses_default() {
        assert_eq!(
            resolver().resolve("/anything", &[], Some("/c/fallback")),
            Some(result("/c/fallback", DEFAULT_PATTERN))
        );
    }

    #[test]
    fn resolves_exact_match() {
        let mappings = [mapping(&["/w/a"], "/c/a")];
        assert_eq!(
            resolver().resolve("/w/a", &mappings, None),
            Some(result("/c/a", "/w/a"))
        );
    }

    #[test]
    fn resolves_directory_prefix_match() {
        let mappings = [mapping(&["/w/a"], "/c/a")];
        assert_eq!(
            resolver().resolve("/w/a/project/src", &mappings, None),
            Some(result("/c/a", "/w/a"))
        );
    }

    #[test]
    fn resolves_glob_match() {
        let mappings = [mapping(&["/w/a/**"], "/c/a")];
        assert_eq!(
            resolver().resolve("/w/a/src/x.ts", &mappings, None),
            Some(result("/c/a", "/w/a/**"))
        );
    }

    #[test]
    fn longest_pattern_wins_across_mappings() {
        let mappings = [mapping(&["/w/**"], "/c/w"), mapping(&["/w/a/**"], "/c/a")];
        assert_eq!(
            resolver().resolve("/w/a/proj", &mappings, None),
            Some(result("/c/a", "/w/a/**"))
        );
    }

    #[test]
    fn longest_pattern_wins_regardless_of_order() {
        let mappings = [mapping(&["/w/a/**"], "/c/a"), mapping(&["/w/**"], "/c/w")];
        assert_eq!(
            resolver().resolve("/w/a/proj", &mappings, None),
            Some(result("/c/a", "/w/a/**"))
        );
    }

    #[test]
    fn longest_pattern_wins_within_single_mapping() {
        let mappings = [mapping(&["/w/**", "/w/a/**"], "/c/a")];
        assert_eq!(
            resolver().resolve("/w/a/proj", &mappings, None),
            Some(result("/c/a", "/w/a/**"))
        );
    }

    #[test]
    fn equal_length_tie_keeps_earliest() {
        let mappings = [
            mapping(&["/w/a", "/w/b"], "/c/first"),
            mapping(&["/w/a"], "/c/second"),
        ];
        assert_eq!(
            resolver().resolve("/w/a", &mappings, None),
            Some(result("/c/first", "/w/a"))
        );
    }

    #[test]
    fn multiple_patterns_share_one_config_dir() {
        let mappings = [mapping(&["/w/a", "/w/b"], "/c/shared")];
        assert_eq!(
            resolver().resolve("/w/a", &mappings, None),
            Some(result("/c/shared", "/w/a"))
        );
        assert_eq!(
            resolver().resolve("/w/b", &mappings, None),
            Some(result("/c/shared", "/w/b"))
        );
    }

    #[test]
    fn no_match_without_default_is_none() {
        let mappings = [mapping(&["/w/b"], "/c/b")];
        assert_eq!(resolver().resolve("/other", &mappings, None), None);
    }

    #[test]
    fn no_match_with_default_uses_default() {
        let mappings = [mapping(&["/w/b"], "/c/b")];
        assert_eq!(
            resolver().resolve("/other", &mappings, Some("/c/fallback")),
            Some(result("/c/fallback", DEFAULT_PATTERN))
        );
    }

    #[test]
    fn expands_tilde_in_input_path() {
        let mappings = [mapping(&["/home/tester/work/**"], "/c/work")];
        assert_eq!(
            resolver().resolve("~/work/sub", &mappings, None),
            Some(result("/c/work", "/home/tester/work/**"))
        );
    }

    #[test]
    fn symlink_retry_matches_canonical_path() {
        let normalizer = FakeNormalizer::new().with_link("/tmp/link/proj", "/real/path/proj");
        let resolver = Resolver::with_normalizer(normalizer);
        let mappings = [mapping(&["/real/path/**"], "/c/real")];
        assert_eq!(
            resolver.resolve("/tmp/link/proj", &mappings, None),
            Some(result("/c/real", "/real/path/**"))
        );
    }

    #[test]
    fn symlink_retry_skipped_when_canonical_is_identical() {
        let normalizer = FakeNormalizer::new().with_link("/w/x", "/w/x");
        let resolver = Resolver::with_normalizer(normalizer);
        let mappings = [mapping(&["/w/a"], "/c/a")];
        assert_eq!(resolver.resolve("/w/x", &mappings, None), None);
    }

    #[test]
    fn direct_match_skips_canonicalization() {
        // A link that would redirect to a different mapping must not be
        // consulted when the literal path already matches.
        let normalizer = FakeNormalizer::new().with_link("/w/a", "/w/b");
        let resolver = Resolver::with_normalizer(normalizer);
        let mappings = [mapping(&["/w/a"], "/c/a"), mapping(&["/w/b"], "/c/b")];
        assert_eq!(
            resolver.resolve("/w/a", &mappings, None),
            Some(result("/c/a", "/w/a"))
        );
    }

    #[test]
    fn canonicalization_failure_falls_back_to_default() {
        let mappings = [mapping(&["/w/a"], "/c/a")];
        assert_eq!(
            resolver().resolve("/missing", &mappings, Some("/c/fallback")),
            Some(result("/c/fallback", DEFAULT_PATTERN))
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let mappings = [mapping(&["/w/**", "/w/a"], "/c/a")];
        let resolver = resolver();
        let first = resolver.resolve("/w/a/x", &mappings, Some("/c/d"));
        let second = resolver.resolve("/w/a/x", &mappings, Some("/c/d"));
        assert_eq!(first, second);
    }

    #[test]
    fn match_result_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&result("/c/a", "/w/a/**")).unwrap();
        assert_eq!(json, r#"{"configDir":"/c/a","matchedPattern":"/w/a/**"}"#);
    }
}

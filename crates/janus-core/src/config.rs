//! Configuration model and JSON loader
//!
//! The config document lives at `$XDG_CONFIG_HOME/janus/config.json`
//! (falling back to `~/.config`). Schema violations are rejected here,
//! before the resolver ever runs, so resolution can assume non-empty
//! pattern lists and config directories throughout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::{PathNormalizer, SystemNormalizer, expand_tilde};

/// Directory under the config base that holds the janus config
pub const CONFIG_DIR_NAME: &str = "janus";

/// File name of the config document
pub const CONFIG_FILE_NAME: &str = "config.json";

/// One configuration entry: a set of path patterns and the configuration
/// directory they activate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Patterns tried against the working directory, in declaration order
    #[serde(rename = "match")]
    pub match_patterns: Vec<String>,

    /// Configuration directory exported when one of the patterns wins
    #[serde(rename = "configDir")]
    pub config_dir: String,
}

/// The full janus configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fallback configuration directory used when no pattern matches
    #[serde(
        rename = "defaultConfigDir",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_config_dir: Option<String>,

    /// Ordered mapping entries; declaration order is the tie-break order
    pub mappings: Vec<Mapping>,
}

/// Path of the config document: `$XDG_CONFIG_HOME/janus/config.json`,
/// falling back to `~/.config/janus/config.json`.
pub fn default_config_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    config_path_under(&base)
}

/// Config document path under an explicit config base directory.
pub fn config_path_under(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Load and validate the config document at the default location.
pub fn load_default_config() -> Result<Config> {
    load_config(default_config_path())
}

/// Load and validate a config document.
///
/// Rejects a missing file, invalid JSON, and schema violations (missing
/// `mappings`, empty `mappings`, a mapping with an empty `match` array or
/// a missing/empty `configDir`). Tilde is expanded in every pattern and
/// configuration directory before the config is handed to callers.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    load_config_with(path, &SystemNormalizer)
}

/// [`load_config`] with an explicit normalizer for the tilde expansion.
pub fn load_config_with(
    path: impl AsRef<Path>,
    normalizer: &impl PathNormalizer,
) -> Result<Config> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(?path, "Loading config");
    let content = std::fs::read_to_string(path)?;

    let mut config: Config =
        serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&config)?;

    for mapping in &mut config.mappings {
        for pattern in &mut mapping.match_patterns {
            *pattern = expand_tilde(pattern, normalizer);
        }
        mapping.config_dir = expand_tilde(&mapping.config_dir, normalizer);
    }
    if let Some(dir) = &mut config.default_config_dir {
        *dir = expand_tilde(dir, normalizer);
    }

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.mappings.is_empty() {
        return Err(Error::invalid("config must have at least one mapping"));
    }

    for mapping in &config.mappings {
        if mapping.match_patterns.is_empty() {
            return Err(Error::invalid("match must have at least one pattern"));
        }
        if mapping.match_patterns.iter().any(|p| p.is_empty()) {
            return Err(Error::invalid("match patterns must not be empty"));
        }
        if mapping.config_dir.is_empty() {
            return Err(Error::invalid("configDir must not be empty"));
        }
    }

    if let Some(dir) = &config.default_config_dir
        && dir.is_empty()
    {
        return Err(Error::invalid("defaultConfigDir must not be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_under_appends_janus_config_json() {
        assert_eq!(
            config_path_under(Path::new("/test/config")),
            PathBuf::from("/test/config/janus/config.json")
        );
    }

    #[test]
    fn default_config_path_ends_with_janus_config_json() {
        let path = default_config_path();
        assert!(path.ends_with("janus/config.json"));
    }

    #[test]
    fn validate_rejects_empty_mappings() {
        let config = Config {
            default_config_dir: None,
            mappings: vec![],
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("at least one mapping"));
    }

    #[test]
    fn validate_rejects_empty_match_array() {
        let config = Config {
            default_config_dir: None,
            mappings: vec![Mapping {
                match_patterns: vec![],
                config_dir: "/test".to_string(),
            }],
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("at least one pattern"));
    }

    #[test]
    fn validate_rejects_empty_config_dir() {
        let config = Config {
            default_config_dir: None,
            mappings: vec![Mapping {
                match_patterns: vec!["/test/**".to_string()],
                config_dir: String::new(),
            }],
        };
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("configDir"));
    }
}

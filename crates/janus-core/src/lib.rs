//! Core resolution logic for janus
//!
//! Maps a working directory onto a configuration directory through an
//! ordered set of pattern mappings, and carries the supporting pieces:
//! config loading, shell hook management, and subprocess execution.

pub mod config;
pub mod error;
pub mod exec;
pub mod hook;
pub mod matcher;
pub mod path;
pub mod resolver;

pub use config::{
    Config, Mapping, default_config_path, load_config, load_config_with, load_default_config,
};
pub use error::{Error, Result};
pub use hook::ShellType;
pub use path::{PathNormalizer, SystemNormalizer, expand_tilde};
pub use resolver::{DEFAULT_PATTERN, MatchResult, Resolver};

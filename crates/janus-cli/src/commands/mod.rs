//! Command implementations for janus-cli

pub mod exec;
pub mod hook;

pub use exec::run_exec;
pub use hook::{run_hook, run_install, run_uninstall};
pub use test::run_test;

//! TestCafe runner wrapper
//!
//! This library turns structured test-run configurations into command
//! lines for the TestCafe end-to-end test runner and launches it.

pub mod cli;
pub mod commands;
pub mod common;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use runner::{build_command_line, build_compiler_options, Arg, RunConfig, RunnerEnv};

//! TestCafe command-line construction
//!
//! Turns a structured run configuration into the argument vector of the
//! external TestCafe runner, and launches it. Browser automation, test
//! execution and reporting all happen inside TestCafe.

pub mod args;
pub mod browser;
pub mod compiler;
pub mod config;
pub mod env;
mod launch;

pub use args::{build_command_line, Arg};
pub use compiler::build_compiler_options;
pub use config::*;
pub use env::RunnerEnv;
pub use launch::launch;

//! CLI command definitions
//!
//! Defines the clap commands for the runner wrapper.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the TestCafe argument list for a run config as JSON
    Args {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Print the serialized --compiler-options value for a run config
    CompilerOptions {
        /// Path to the run config (YAML or JSON)
        config: PathBuf,
    },

    /// Build the argument list and launch TestCafe
    Run {
        #[command(flatten)]
        run: RunArgs,

        /// Runner executable (overrides runner.executable in config.toml)
        #[arg(long)]
        runner: Option<PathBuf>,
    },
}

/// Inputs shared by commands that build a command line
#[derive(Args)]
pub struct RunArgs {
    /// Path to the run config (YAML or JSON)
    pub config: PathBuf,

    /// Project root used to resolve client scripts (default: config file's directory)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Directory for video, screenshots and reports (default: <project>/__assets__)
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

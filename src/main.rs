//! TestCafe runner wrapper CLI
//!
//! Builds TestCafe command lines from YAML/JSON run configs and launches
//! the runner.

use clap::Parser;
use testcafe_runner::commands::Commands;
use testcafe_runner::{cli, common::logging};

#[derive(Parser)]
#[command(name = "testcafe-runner", about = "Run TestCafe from a structured config")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

//! CLI command handling
//!
//! Loads configs, builds the command line and prints or launches it.

use std::path::PathBuf;

use colored::Colorize;

use crate::commands::{Commands, RunArgs};
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::runner::{self, RunConfig, RunnerEnv};

/// Dispatch a CLI command, returning the process exit code
pub async fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Args { run } => {
            let config = Config::load()?;
            let prepared = prepare(&run, &config)?;

            println!("{}", serde_json::to_string(&prepared.args)?);
            Ok(0)
        }

        Commands::CompilerOptions { config } => {
            let run_config = RunConfig::load(&config)?;
            let serialized = run_config
                .compiler_options
                .as_ref()
                .map(runner::build_compiler_options)
                .unwrap_or_default();

            println!("{serialized}");
            Ok(0)
        }

        Commands::Run {
            run,
            runner: runner_override,
        } => {
            let mut config = Config::load()?;
            if let Some(exe) = runner_override {
                config.runner.executable = exe;
            }
            let executable = config.resolve_runner()?;
            let prepared = prepare(&run, &config)?;

            std::fs::create_dir_all(&prepared.assets).map_err(|e| {
                Error::Config(format!(
                    "Cannot create assets directory '{}': {}",
                    prepared.assets.display(),
                    e
                ))
            })?;

            let status = runner::launch(
                &executable,
                &config.runner.args,
                &prepared.args,
                &prepared.project,
            )
            .await?;

            let code = status.code().unwrap_or(1);
            if status.success() {
                println!("{} TestCafe finished", "✓".green());
            } else {
                println!(
                    "{} TestCafe exited with code {}",
                    "✗".red(),
                    code.to_string().red()
                );
            }
            println!("  Assets: {}", prepared.assets.display().to_string().dimmed());

            Ok(code)
        }
    }
}

/// A command line ready to print or launch
struct Prepared {
    project: PathBuf,
    assets: PathBuf,
    args: Vec<runner::Arg>,
}

fn prepare(run: &RunArgs, config: &Config) -> Result<Prepared> {
    let run_config = RunConfig::load(&run.config)?;

    let project = paths::project_dir(run.project.as_deref(), &run.config)?;
    let assets = paths::assets_dir(run.assets.as_deref(), &project, &config.output.assets_dir)?;

    let env = RunnerEnv::from_process();
    let args = runner::build_command_line(&run_config, &project, &assets, &env)?;

    Ok(Prepared {
        project,
        assets,
        args,
    })
}

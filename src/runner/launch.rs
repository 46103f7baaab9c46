//! Runner process launch
//!
//! Hands the generated argument vector to the TestCafe executable. The
//! runner owns the session from here on: it writes video, screenshots and
//! reports itself, and its exit status is the result.

use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command as TokioCommand;

use crate::common::{Error, Result};

use super::args::{to_os_args, Arg};

/// Launch the runner and wait for it to exit
///
/// `prefix` is inserted before the generated arguments (e.g. a script path
/// when the executable is `node`). Stdout and stderr are inherited.
pub async fn launch(
    executable: &Path,
    prefix: &[String],
    args: &[Arg],
    cwd: &Path,
) -> Result<ExitStatus> {
    let os_args = to_os_args(args);

    tracing::info!(
        "Launching {} {} {}",
        executable.display(),
        prefix.join(" "),
        os_args.join(" ")
    );

    let status = TokioCommand::new(executable)
        .args(prefix)
        .args(&os_args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::RunnerSpawn(format!("{}: {}", executable.display(), e)))?;

    tracing::debug!("Runner exited with {:?}", status.code());
    Ok(status)
}

//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/testcafe-runner/`
//! - macOS: `~/Library/Application Support/testcafe-runner/`
//! - Windows: `%APPDATA%\testcafe-runner\`

use std::io;
use std::path::{Path, PathBuf};

/// Name used for the config directory
const APP_NAME: &str = "testcafe-runner";

/// Directory name, relative to the project, used when no assets dir is given
pub const DEFAULT_ASSETS_DIR: &str = "__assets__";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Resolve the project directory for a run config file
///
/// An explicit directory wins; otherwise the directory containing the
/// config file is used. The result is always absolute.
pub fn project_dir(explicit: Option<&Path>, config_file: &Path) -> io::Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => config_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let dir = absolute_from(&std::env::current_dir()?, &dir);
    Ok(dir.canonicalize().unwrap_or(dir))
}

/// Resolve the assets directory, defaulting to `<project>/<default_name>`
///
/// A relative explicit directory is taken from the caller's working
/// directory, not the project's, since the runner is started in the project.
pub fn assets_dir(
    explicit: Option<&Path>,
    project: &Path,
    default_name: &str,
) -> io::Result<PathBuf> {
    Ok(match explicit {
        Some(dir) => absolute_from(&std::env::current_dir()?, dir),
        None => project.join(default_name),
    })
}

/// Join `path` onto `base` unless it is already absolute
fn absolute_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_is_valid() {
        let dir = config_dir();
        assert!(dir.is_some());
    }

    #[test]
    fn test_project_dir_prefers_explicit() {
        let dir = project_dir(Some(Path::new("/nonexistent/project")), Path::new("a/b.yaml")).unwrap();
        assert_eq!(dir, PathBuf::from("/nonexistent/project"));
    }

    #[test]
    fn test_project_dir_falls_back_to_config_parent() {
        let dir = project_dir(None, Path::new("/nonexistent/suite/run.yaml")).unwrap();
        assert_eq!(dir, PathBuf::from("/nonexistent/suite"));
    }

    #[test]
    fn test_project_dir_is_absolute() {
        let dir = project_dir(None, Path::new("run.yaml")).unwrap();
        assert!(dir.is_absolute());
    }

    #[test]
    fn test_assets_dir_default() {
        let dir = assets_dir(None, Path::new("/proj"), DEFAULT_ASSETS_DIR).unwrap();
        assert_eq!(dir, PathBuf::from("/proj/__assets__"));
    }

    #[test]
    fn test_assets_dir_explicit_absolute() {
        let dir = assets_dir(Some(Path::new("/tmp/out")), Path::new("/proj"), DEFAULT_ASSETS_DIR)
            .unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_assets_dir_relative_uses_working_directory() {
        let dir = assets_dir(Some(Path::new("out")), Path::new("/proj"), DEFAULT_ASSETS_DIR)
            .unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap().join("out"));
    }

    #[test]
    fn test_absolute_from() {
        let base = Path::new("/caller");
        assert_eq!(absolute_from(base, Path::new("out")), PathBuf::from("/caller/out"));
        assert_eq!(absolute_from(base, Path::new("/abs")), PathBuf::from("/abs"));
    }
}

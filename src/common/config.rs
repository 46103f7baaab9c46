//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::{config_path, DEFAULT_ASSETS_DIR};
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Test runner settings
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Output location settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// How to invoke the external test runner
#[derive(Debug, Deserialize, Clone)]
pub struct RunnerConfig {
    /// Runner executable name or path
    #[serde(default = "default_executable")]
    pub executable: PathBuf,

    /// Arguments placed before the generated command line
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            args: Vec::new(),
        }
    }
}

fn default_executable() -> PathBuf {
    PathBuf::from("testcafe")
}

/// Output location settings
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Assets directory name, relative to the project, used when none is given
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> String {
    DEFAULT_ASSETS_DIR.to_string()
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Resolve the runner executable
    ///
    /// Paths containing a separator are used as-is; bare names are looked
    /// up on PATH.
    pub fn resolve_runner(&self) -> Result<PathBuf> {
        let exe = &self.runner.executable;
        if exe.components().count() > 1 {
            return Ok(exe.clone());
        }
        which::which(exe).map_err(|_| {
            Error::runner_not_found(&exe.display().to_string(), config_path().as_deref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.runner.executable, PathBuf::from("testcafe"));
        assert!(config.runner.args.is_empty());
        assert_eq!(config.output.assets_dir, "__assets__");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[runner]
executable = "/opt/node/bin/testcafe"
args = ["--color"]

[output]
assets_dir = "artifacts"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.runner.executable,
            PathBuf::from("/opt/node/bin/testcafe")
        );
        assert_eq!(config.runner.args, vec!["--color".to_string()]);
        assert_eq!(config.output.assets_dir, "artifacts");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nassets_dir = \"out\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.runner.executable, PathBuf::from("testcafe"));
        assert_eq!(config.output.assets_dir, "out");
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[runner\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_resolve_runner_explicit_path() {
        let config = Config {
            runner: RunnerConfig {
                executable: PathBuf::from("/opt/bin/testcafe"),
                args: Vec::new(),
            },
            ..Default::default()
        };
        assert_eq!(
            config.resolve_runner().unwrap(),
            PathBuf::from("/opt/bin/testcafe")
        );
    }
}

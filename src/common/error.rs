//! Error types for the TestCafe runner wrapper
//!
//! The argument builder itself only ever fails with `UnsupportedBrowser`;
//! the remaining variants belong to config loading and launching.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the runner wrapper
#[derive(Error, Debug)]
pub enum Error {
    // === Argument Building Errors ===
    #[error("Unsupported browser: {0}.")]
    UnsupportedBrowser(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === Runner Errors ===
    #[error("Failed to launch test runner: {0}")]
    RunnerSpawn(String),

    #[error("Test runner '{name}' not found. Install it with 'npm install -g testcafe' or set runner.executable in {config}")]
    RunnerNotFound { name: String, config: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file read error for the given path
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a runner not found error pointing at the config file
    pub fn runner_not_found(name: &str, config: Option<&std::path::Path>) -> Self {
        Self::RunnerNotFound {
            name: name.to_string(),
            config: config
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.toml".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_browser_message() {
        let err = Error::UnsupportedBrowser("invalid".to_string());
        assert_eq!(err.to_string(), "Unsupported browser: invalid.");
    }

    #[test]
    fn test_file_read_includes_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = Error::file_read(std::path::Path::new("/tmp/run.yaml"), &io_err);
        assert!(err.to_string().contains("/tmp/run.yaml"));
        assert!(err.to_string().contains("gone"));
    }
}

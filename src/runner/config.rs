//! Run configuration types
//!
//! Defines the data structures for deserializing a TestCafe run
//! configuration from YAML or JSON. Keys use the camelCase names of the
//! hosting platform's config format.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::common::{Error, Result};

/// A complete run configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Logical browser name (e.g. "firefox"), looked up in the alias table
    pub browser_name: String,
    /// Test source glob(s)
    pub src: Sources,
    /// Extra launch arguments appended to the browser token
    #[serde(default)]
    pub browser_args: Vec<String>,
    pub filter: Option<Filter>,
    pub screenshots: Option<Screenshots>,
    pub quarantine_mode: Option<QuarantineMode>,
    /// Milliseconds
    pub selector_timeout: Option<u64>,
    /// Milliseconds
    pub assertion_timeout: Option<u64>,
    /// Milliseconds
    pub page_load_timeout: Option<u64>,
    /// Test speed factor, 0.01 to 1
    pub speed: Option<f64>,
    #[serde(default)]
    pub skip_js_errors: bool,
    #[serde(default)]
    pub skip_uncaught_errors: bool,
    #[serde(default)]
    pub stop_on_first_fail: bool,
    #[serde(default)]
    pub disable_page_caching: bool,
    #[serde(default)]
    pub disable_screenshots: bool,
    /// Script paths, relative to the project directory
    #[serde(default)]
    pub client_scripts: Vec<String>,
    pub ts_config_path: Option<String>,
    pub compiler_options: Option<CompilerOptions>,
}

impl RunConfig {
    /// Create a minimal config with just a browser and sources
    pub fn new(browser_name: impl Into<String>, src: impl Into<Sources>) -> Self {
        Self {
            browser_name: browser_name.into(),
            src: src.into(),
            browser_args: Vec::new(),
            filter: None,
            screenshots: None,
            quarantine_mode: None,
            selector_timeout: None,
            assertion_timeout: None,
            page_load_timeout: None,
            speed: None,
            skip_js_errors: false,
            skip_uncaught_errors: false,
            stop_on_first_fail: false,
            disable_page_caching: false,
            disable_screenshots: false,
            client_scripts: Vec::new(),
            ts_config_path: None,
            compiler_options: None,
        }
    }

    /// Load a run configuration file
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content).map_err(|e| {
                Error::ConfigParse(format!("{}: {}", path.display(), e))
            })
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Error::ConfigParse(format!("{}: {}", path.display(), e))
            })
        }
    }
}

/// Test source patterns: a single glob or an ordered list of globs
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Sources {
    One(String),
    Many(Vec<String>),
}

impl Sources {
    /// Iterate the patterns in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Sources::One(s) => std::slice::from_ref(s),
            Sources::Many(v) => v,
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for Sources {
    fn from(s: &str) -> Self {
        Sources::One(s.to_string())
    }
}

impl From<String> for Sources {
    fn from(s: String) -> Self {
        Sources::One(s)
    }
}

impl From<Vec<String>> for Sources {
    fn from(v: Vec<String>) -> Self {
        Sources::Many(v)
    }
}

impl<const N: usize> From<[&str; N]> for Sources {
    fn from(v: [&str; N]) -> Self {
        Sources::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Test and fixture selection
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Exact test name
    pub test: Option<String>,
    /// Exact fixture name
    pub fixture: Option<String>,
    /// Regex matched against test names
    pub test_grep: Option<String>,
    /// Regex matched against fixture names
    pub fixture_grep: Option<String>,
    /// Test metadata to match, in declaration order
    #[serde(default)]
    pub test_meta: Map<String, Value>,
    /// Fixture metadata to match, in declaration order
    #[serde(default)]
    pub fixture_meta: Map<String, Value>,
}

/// Screenshot policy
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Screenshots {
    pub take_on_fails: Option<bool>,
    pub full_page: Option<bool>,
}

/// Quarantine policy for flaky tests
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuarantineMode {
    /// Maximum attempts per test
    pub attempt_limit: Option<u32>,
    /// Passing attempts required to mark a test as passed
    pub success_threshold: Option<u32>,
}

/// Settings for a single compiler (e.g. "typescript")
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    pub config_path: Option<String>,
    pub custom_compiler_module_path: Option<String>,
    /// Raw compiler options, in declaration order
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Compiler settings keyed by compiler name, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilerOptions {
    compilers: Vec<(String, CompilerSettings)>,
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add settings for a compiler, replacing earlier settings in place
    pub fn insert(&mut self, name: impl Into<String>, settings: CompilerSettings) -> &mut Self {
        let name = name.into();
        match self.compilers.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = settings,
            None => self.compilers.push((name, settings)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompilerSettings)> {
        self.compilers.iter().map(|(n, s)| (n.as_str(), s))
    }
}

impl<'de> Deserialize<'de> for CompilerOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CompilerOptionsVisitor;

        impl<'de> Visitor<'de> for CompilerOptionsVisitor {
            type Value = CompilerOptions;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of compiler names to compiler settings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut options = CompilerOptions::new();
                while let Some((name, settings)) = map.next_entry::<String, CompilerSettings>()? {
                    options.insert(name, settings);
                }
                Ok(options)
            }
        }

        deserializer.deserialize_map(CompilerOptionsVisitor)
    }
}

/// Render a config value for a `key=value` list
///
/// Strings are single-quoted when `quote_strings` is set; everything else
/// uses its JSON form.
pub fn format_value(value: &Value, quote_strings: bool) -> String {
    match value {
        Value::String(s) if quote_strings => format!("'{s}'"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

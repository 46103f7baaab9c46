//! Command-line argument builder
//!
//! Translates a [`RunConfig`] into the argument vector for the TestCafe
//! CLI. The flag order is part of the runner contract and is fixed:
//!
//! 1. browser token, then source globs
//! 2. `--compiler-options`, `--quarantine-mode`
//! 3. error/timeout/speed toggles, `--client-scripts`, `--ts-config-path`
//! 4. `--video`, `--video-options` (always)
//! 5. `--proxy`
//! 6. filter flags, `--screenshots`
//! 7. `--reporter` (always)

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::common::Result;

use super::browser;
use super::compiler::build_compiler_options;
use super::config::{format_value, Filter, QuarantineMode, RunConfig, Screenshots};
use super::env::RunnerEnv;

/// Video settings required by the hosting platform
pub const VIDEO_OPTIONS: &str = "singleFile=true,failedOnly=false,pathPattern=video.mp4";

/// Screenshot file name template, expanded by TestCafe
pub const SCREENSHOT_PATH_PATTERN: &str = "${FIXTURE}__${TEST}__screenshot-${FILE_INDEX}";

/// A single command-line token
///
/// Numeric flag values keep their type so callers that hand the list to
/// something other than an OS process (e.g. JSON output) see numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    Str(String),
    Int(u64),
    Float(f64),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{n}"),
            Arg::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<u64> for Arg {
    fn from(n: u64) -> Self {
        Arg::Int(n)
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

impl PartialEq<&str> for Arg {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Arg::Str(s) if s == other)
    }
}

/// Render tokens as plain strings for process spawning
pub fn to_os_args(args: &[Arg]) -> Vec<String> {
    args.iter().map(Arg::to_string).collect()
}

/// Reporter list writing xunit, json and sauce-json reports into `assets`
pub fn reporter_value(assets: &Path) -> String {
    format!(
        "xunit:{},json:{},sauce-json:{},list",
        assets.join("report.xml").display(),
        assets.join("report.json").display(),
        assets.join("sauce-test-report.json").display(),
    )
}

/// Ordered argument list under construction
#[derive(Default)]
struct CommandLine {
    args: Vec<Arg>,
}

impl CommandLine {
    fn push(&mut self, arg: impl Into<Arg>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    fn flag(&mut self, name: &str) -> &mut Self {
        self.push(name)
    }

    fn flag_if(&mut self, enabled: bool, name: &str) -> &mut Self {
        if enabled {
            self.flag(name);
        }
        self
    }

    fn option(&mut self, name: &str, value: impl Into<Arg>) -> &mut Self {
        self.flag(name).push(value)
    }

    fn option_opt<T: Into<Arg>>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.option(name, value);
        }
        self
    }
}

/// Build the TestCafe argument list for a run
///
/// `project_path` anchors relative client scripts; `assets_path` receives
/// video, screenshots and reports. Fails only when the browser name is not
/// in the alias table, in which case nothing is produced.
pub fn build_command_line(
    config: &RunConfig,
    project_path: &Path,
    assets_path: &Path,
    env: &RunnerEnv,
) -> Result<Vec<Arg>> {
    let mut cli = CommandLine::default();

    cli.push(browser_token(config, env)?);
    for pattern in config.src.iter() {
        cli.push(pattern);
    }

    if let Some(compiler_options) = &config.compiler_options {
        let serialized = build_compiler_options(compiler_options);
        if !serialized.is_empty() {
            cli.option("--compiler-options", serialized);
        }
    }

    if let Some(quarantine) = &config.quarantine_mode {
        cli.flag("--quarantine-mode");
        if let Some(value) = quarantine_value(quarantine) {
            cli.push(value);
        }
    }

    cli.flag_if(config.skip_js_errors, "--skip-js-errors")
        .flag_if(config.skip_uncaught_errors, "--skip-uncaught-errors")
        .option_opt("--selector-timeout", config.selector_timeout)
        .option_opt("--assertion-timeout", config.assertion_timeout)
        .option_opt("--page-load-timeout", config.page_load_timeout)
        .option_opt("--speed", config.speed)
        .flag_if(config.stop_on_first_fail, "--stop-on-first-fail")
        .flag_if(config.disable_page_caching, "--disable-page-caching")
        .flag_if(config.disable_screenshots, "--disable-screenshots");

    if !config.client_scripts.is_empty() {
        let scripts = config
            .client_scripts
            .iter()
            .map(|script| project_path.join(script).display().to_string())
            .collect::<Vec<_>>()
            .join(",");
        cli.option("--client-scripts", scripts);
    }

    cli.option_opt("--ts-config-path", config.ts_config_path.as_deref());

    let assets = assets_path.display().to_string();
    cli.option("--video", assets.as_str())
        .option("--video-options", VIDEO_OPTIONS);

    if let Some(proxy) = env.proxy_address() {
        tracing::debug!(proxy, "Routing browser traffic through proxy");
        cli.option("--proxy", proxy);
    }

    if let Some(filter) = &config.filter {
        push_filter(&mut cli, filter);
    }

    if let Some(screenshots) = &config.screenshots {
        cli.option("--screenshots", screenshots_value(screenshots, &assets));
    }

    cli.option("--reporter", reporter_value(assets_path));

    Ok(cli.args)
}

/// Resolve the leading browser token, including VM override and extra args
fn browser_token(config: &RunConfig, env: &RunnerEnv) -> Result<String> {
    let alias = browser::launch_token(&config.browser_name)?;

    tracing::debug!(
        vm = env.vm,
        video_record = env.video_record,
        "Resolving browser '{}'",
        config.browser_name
    );

    let mut token = match env.browser_override() {
        Some(path) => {
            tracing::info!("VM mode: launching browser from {path}");
            path.to_string()
        }
        None => alias.to_string(),
    };

    if !config.browser_args.is_empty() {
        token.push(' ');
        token.push_str(&config.browser_args.join(" "));
    }

    tracing::debug!("Browser token: {token}");
    Ok(token)
}

fn quarantine_value(quarantine: &QuarantineMode) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(limit) = quarantine.attempt_limit {
        parts.push(format!("attemptLimit={limit}"));
    }
    if let Some(threshold) = quarantine.success_threshold {
        parts.push(format!("successThreshold={threshold}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(","))
    }
}

fn push_filter(cli: &mut CommandLine, filter: &Filter) {
    cli.option_opt("--test", filter.test.as_deref())
        .option_opt("--fixture", filter.fixture.as_deref())
        .option_opt("--test-grep", filter.test_grep.as_deref())
        .option_opt("--fixture-grep", filter.fixture_grep.as_deref());

    if !filter.test_meta.is_empty() {
        cli.option("--test-meta", meta_value(&filter.test_meta));
    }
    if !filter.fixture_meta.is_empty() {
        cli.option("--fixture-meta", meta_value(&filter.fixture_meta));
    }
}

fn meta_value(meta: &serde_json::Map<String, serde_json::Value>) -> String {
    meta.iter()
        .map(|(key, value)| format!("{key}={}", format_value(value, false)))
        .collect::<Vec<_>>()
        .join(",")
}

fn screenshots_value(screenshots: &Screenshots, assets: &str) -> String {
    let mut parts = Vec::new();
    if let Some(take_on_fails) = screenshots.take_on_fails {
        parts.push(format!("takeOnFails={take_on_fails}"));
    }
    if let Some(full_page) = screenshots.full_page {
        parts.push(format!("fullPage={full_page}"));
    }
    parts.push(format!("path={assets}"));
    parts.push(format!("pathPattern={SCREENSHOT_PATH_PATTERN}"));
    parts.join(",")
}

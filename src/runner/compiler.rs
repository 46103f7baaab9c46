//! Compiler options serialization
//!
//! Renders nested compiler settings into the single
//! `<compiler>.<field>=<value>,...` string TestCafe expects after
//! `--compiler-options`.

use super::config::{format_value, CompilerOptions};

/// Serialize compiler options in declaration order
///
/// Per compiler: `configPath`, then `customCompilerModulePath`, then each
/// entry of `options` under an `options.` prefix. Strings are single-quoted.
/// Returns an empty string when there is nothing to emit.
pub fn build_compiler_options(options: &CompilerOptions) -> String {
    let mut fragments = Vec::new();

    for (compiler, settings) in options.iter() {
        if let Some(path) = &settings.config_path {
            fragments.push(format!("{compiler}.configPath='{path}'"));
        }
        if let Some(path) = &settings.custom_compiler_module_path {
            fragments.push(format!("{compiler}.customCompilerModulePath='{path}'"));
        }
        for (name, value) in &settings.options {
            fragments.push(format!(
                "{compiler}.options.{name}={}",
                format_value(value, true)
            ));
        }
    }

    fragments.join(",")
}

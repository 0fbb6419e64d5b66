use std::path::Path;

use crate::cli::{Cli, ConfigAction};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleGuardError};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            super::report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Full validation pass: existence, TOML syntax, version, then the
/// semantic checks [`Config::validate`] performs.
///
/// # Errors
/// Returns the first problem found.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(StyleGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let config = FileConfigLoader::new().load_from_path(config_path)?;
    config.validate()?;

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            super::report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the configuration that a check run would actually use,
/// defaults filled in.
///
/// # Errors
/// Returns an error when loading or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: &str,
    cli: &Cli,
) -> Result<String> {
    let config = super::load_config(config_path, cli.no_config)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        "text" => Ok(format_config_text(&config)),
        other => Err(StyleGuardError::Config(format!(
            "Unknown config output format '{other}'. Valid values: text, json"
        ))),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    let _ = writeln!(output, "version = {}", config.version);

    output.push_str("\n[scan]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.scan.extensions);
    let _ = writeln!(output, "  exclude = {:?}", config.scan.exclude);
    if !config.scan.include_paths.is_empty() {
        let _ = writeln!(output, "  include-paths = {:?}", config.scan.include_paths);
    }
    let _ = writeln!(output, "  gitignore = {}", config.scan.gitignore);

    output.push_str("\n[check]\n");
    let _ = writeln!(output, "  strict = {}", config.check.strict);

    output.push_str("\n[rules]\n");
    let _ = writeln!(
        output,
        "  no-hungarian-notation = \"{}\"",
        config.rules.no_hungarian_notation.as_str()
    );
    let _ = writeln!(
        output,
        "  no-comment-separators = \"{}\"",
        config.rules.no_comment_separators.as_str()
    );
    let _ = writeln!(
        output,
        "  starred-block-comments = \"{}\"",
        config.rules.starred_block_comments.as_str()
    );
    let _ = writeln!(
        output,
        "  no-constructor-name = \"{}\"",
        config.rules.no_constructor_name.as_str()
    );

    output.push_str("\n[constructor-name]\n");
    let _ = writeln!(
        output,
        "  ignore-kinds = {:?}",
        config.constructor_name.ignore_kinds
    );

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

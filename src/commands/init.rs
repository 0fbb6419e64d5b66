use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleGuardError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            super::report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# style-guard configuration file
# See: https://github.com/doraemonkeys/style-guard for documentation

version = 1

[scan]
# File extensions to lint
extensions = ["js", "jsx", "mjs", "cjs"]

# Glob patterns excluded from the walk
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/coverage/**",
]

# Glob patterns re-included after an exclude match
# include-paths = ["dist/config/**"]

# Honor .gitignore files during the walk (default: true)
gitignore = true

[check]
# Treat warnings as failures (default: false)
# strict = true

# Per-rule levels: "off", "warn", or "error"
[rules]
no-hungarian-notation = "error"
no-comment-separators = "warn"
starred-block-comments = "warn"
no-constructor-name = "error"

# Options for the no-constructor-name rule
[constructor-name]
# Syntax-tree node kinds whose occurrences are not reported
ignore-kinds = [
    "comment",
    "string",
    "string_fragment",
    "template_string",
    "regex_pattern",
    "statement_block",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Terminal color policy for the text report.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colorize when stdout is a terminal
    #[default]
    Auto,
    /// Force colors on
    Always,
    /// Disable colors entirely
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "JavaScript style guard - enforce style hygiene rules")]
#[command(long_about = "A linter for JavaScript style hygiene: Hungarian notation, decorative \
    separator comments, unstarred block comments, and minification-unsafe constructor.name \
    lookups.\n\n\
    Exit codes:\n  \
    0 - No violations found\n  \
    1 - Style violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to use colors in the text report
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Ignore any configuration file and run with built-in defaults
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against the style rules
    Check(CheckArgs),

    /// List the built-in rules or explain one
    Rules(RulesArgs),

    /// Write a starter configuration file
    Init(InitArgs),

    /// Validate or display the configuration
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Files or directories to lint
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Load configuration from this file instead of searching upward
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Limit linting to these extensions (comma-separated, e.g., js,jsx,mjs)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Skip paths matching this glob (repeatable)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Re-include paths matching these patterns after excludes (glob syntax)
    #[arg(long, short = 'I')]
    pub include: Vec<String>,

    /// Do not honor .gitignore files during the walk
    #[arg(long)]
    pub no_gitignore: bool,

    /// Apply automatic fixes where available, rewriting files in place
    #[arg(long)]
    pub fix: bool,

    /// Output format [possible values: text, json, sarif]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file rather than stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report violations without failing the run
    #[arg(long)]
    pub warn_only: bool,

    /// Fail (exit 1) when warnings are present
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Rule name to explain (lists all rules when omitted)
    pub rule: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the generated file
    #[arg(short, long, default_value = ".style-guard.toml")]
    pub output: PathBuf,

    /// Replace the file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Parse a configuration file and report problems
    Validate {
        /// Configuration file to validate
        #[arg(short, long, default_value = ".style-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration (after defaults)
    Show {
        /// Configuration file to display
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

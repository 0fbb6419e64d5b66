use rayon::prelude::*;

use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::diagnostics::FileReport;
use crate::linter::Linter;
use crate::output::{
    ColorMode, JsonFormatter, LintProgress, OutputFormat, OutputFormatter, SarifFormatter,
    TextFormatter,
};
use crate::rules::RuleSet;
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            super::report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration and fold in CLI overrides
    let mut config = super::load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    // 2. Build the rule set and linter
    let rules = RuleSet::from_config(&config)?;
    let linter = Linter::new(rules);

    // 3. Discover files
    let filter = GlobFilter::new(
        config.scan.extensions.clone(),
        &config.scan.exclude,
        &config.scan.include_paths,
    )?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scan.gitignore);
    let files = scanner.scan_all(&args.paths)?;

    // 4. Lint each file (parallel with rayon)
    let progress = LintProgress::new(files.len() as u64, cli.quiet);
    let processed: Vec<(FileReport, usize)> = files
        .par_iter()
        .filter_map(|path| {
            let outcome = if args.fix {
                linter.fix_file(path)
            } else {
                linter.lint_file(path).map(|report| (report, 0))
            };
            progress.inc();
            match outcome {
                Ok(result) => Some(result),
                Err(e) => {
                    eprintln!("Warning: skipping '{}': {e}", path.display());
                    None
                }
            }
        })
        .collect();
    progress.finish();

    let mut fixes_applied = 0;
    let mut reports = Vec::with_capacity(processed.len());
    for (report, fixes) in processed {
        fixes_applied += fixes;
        reports.push(report);
    }
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    // 5. Format and write output
    let color_mode = super::color_choice_to_mode(cli.color);
    let output = format_output(args.format, &reports, color_mode, cli.verbose, !args.fix)?;
    super::write_output(args.output.as_deref(), &output, cli.quiet)?;

    if args.fix && !cli.quiet {
        eprintln!("Applied {fixes_applied} fixes");
    }

    // 6. Determine exit code
    if args.warn_only {
        return Ok(EXIT_SUCCESS);
    }

    let has_errors = reports.iter().any(|r| r.error_count() > 0);
    let has_warnings = reports.iter().any(|r| r.warning_count() > 0);

    if has_errors || (config.check.strict && has_warnings) {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref extensions) = args.ext {
        config.scan.extensions.clone_from(extensions);
    }

    config.scan.exclude.extend(args.exclude.iter().cloned());
    config
        .scan
        .include_paths
        .extend(args.include.iter().cloned());

    if args.no_gitignore {
        config.scan.gitignore = false;
    }

    if args.strict {
        config.check.strict = true;
    }
}

pub(crate) fn format_output(
    format: OutputFormat,
    reports: &[FileReport],
    color_mode: ColorMode,
    verbose: u8,
    fix_hint: bool,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose)
            .with_fix_hint(fix_hint)
            .format(reports),
        OutputFormat::Json => JsonFormatter.format(reports),
        OutputFormat::Sarif => SarifFormatter::new().format(reports),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

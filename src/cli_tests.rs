use std::path::PathBuf;

use super::*;

fn check_args(cli: Cli) -> CheckArgs {
    match cli.command {
        Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["style-guard", "check"]);
    let args = check_args(cli);
    assert_eq!(args.paths, vec![PathBuf::from(".")]);
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["style-guard", "check", "src", "tests"]);
    let args = check_args(cli);
    assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("tests")]);
}

#[test]
fn cli_check_with_config() {
    let cli = Cli::parse_from(["style-guard", "check", "--config", "custom.toml"]);
    let args = check_args(cli);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_check_ext_is_comma_separated() {
    let cli = Cli::parse_from(["style-guard", "check", "--ext", "js,jsx,mjs"]);
    let args = check_args(cli);
    assert_eq!(
        args.ext,
        Some(vec!["js".to_string(), "jsx".to_string(), "mjs".to_string()])
    );
}

#[test]
fn cli_check_exclude_repeats() {
    let cli = Cli::parse_from([
        "style-guard",
        "check",
        "-x",
        "**/dist/**",
        "--exclude",
        "**/build/**",
    ]);
    let args = check_args(cli);
    assert_eq!(args.exclude, ["**/dist/**", "**/build/**"]);
}

#[test]
fn cli_check_include_repeats() {
    let cli = Cli::parse_from(["style-guard", "check", "-I", "dist/config/**"]);
    let args = check_args(cli);
    assert_eq!(args.include, ["dist/config/**"]);
}

#[test]
fn cli_check_flags_default_off() {
    let cli = Cli::parse_from(["style-guard", "check"]);
    let args = check_args(cli);
    assert!(!args.fix);
    assert!(!args.no_gitignore);
    assert!(!args.warn_only);
    assert!(!args.strict);
    assert!(args.output.is_none());
}

#[test]
fn cli_check_format_parses_into_the_enum() {
    let cli = Cli::parse_from(["style-guard", "check", "--format", "json"]);
    let args = check_args(cli);
    assert_eq!(args.format, OutputFormat::Json);

    let cli = Cli::parse_from(["style-guard", "check", "--format", "sarif"]);
    assert_eq!(check_args(cli).format, OutputFormat::Sarif);

    let cli = Cli::parse_from(["style-guard", "check"]);
    assert_eq!(check_args(cli).format, OutputFormat::Text);
}

#[test]
fn cli_check_rejects_unknown_formats() {
    let result = Cli::try_parse_from(["style-guard", "check", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_fix_and_output() {
    let cli = Cli::parse_from(["style-guard", "check", "--fix", "--output", "report.txt"]);
    let args = check_args(cli);
    assert!(args.fix);
    assert_eq!(args.output, Some(PathBuf::from("report.txt")));
}

#[test]
fn cli_global_flags_apply_before_the_subcommand() {
    let cli = Cli::parse_from(["style-guard", "-v", "-v", "--quiet", "check"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
}

#[test]
fn cli_global_flags_apply_after_the_subcommand() {
    let cli = Cli::parse_from(["style-guard", "check", "--no-config", "-v"]);
    assert!(cli.no_config);
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_rules_without_a_name_lists() {
    let cli = Cli::parse_from(["style-guard", "rules"]);
    match cli.command {
        Commands::Rules(args) => assert!(args.rule.is_none()),
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn cli_rules_with_a_name_explains() {
    let cli = Cli::parse_from(["style-guard", "rules", "no-constructor-name"]);
    match cli.command {
        Commands::Rules(args) => {
            assert_eq!(args.rule, Some("no-constructor-name".to_string()));
        }
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["style-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".style-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_output_and_force() {
    let cli = Cli::parse_from(["style-guard", "init", "--output", "custom.toml", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("custom.toml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_validate_defaults_to_the_local_file() {
    let cli = Cli::parse_from(["style-guard", "config", "validate"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Validate { config } => {
                assert_eq!(config, PathBuf::from(".style-guard.toml"));
            }
            ConfigAction::Show { .. } => panic!("Expected Validate action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_config_show_with_format() {
    let cli = Cli::parse_from(["style-guard", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Show { config, format } => {
                assert!(config.is_none());
                assert_eq!(format, "json");
            }
            ConfigAction::Validate { .. } => panic!("Expected Show action"),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["style-guard"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

use tempfile::TempDir;

use crate::cli::InitArgs;
use crate::config::{Config, RuleLevel};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::{generate_config_template, run_init, run_init_impl};

#[test]
fn template_declares_the_supported_version() {
    let template = generate_config_template();
    assert!(template.contains("version = 1"));
}

#[test]
fn template_lists_scan_defaults() {
    let template = generate_config_template();
    assert!(template.contains(r#"extensions = ["js", "jsx", "mjs", "cjs"]"#));
    assert!(template.contains("**/node_modules/**"));
    assert!(template.contains("gitignore = true"));
}

#[test]
fn template_sets_every_rule_level() {
    let template = generate_config_template();
    assert!(template.contains(r#"no-hungarian-notation = "error""#));
    assert!(template.contains(r#"no-comment-separators = "warn""#));
    assert!(template.contains(r#"starred-block-comments = "warn""#));
    assert!(template.contains(r#"no-constructor-name = "error""#));
}

#[test]
fn template_parses_back_into_the_default_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.validate().is_ok());
}

#[test]
fn template_keeps_optional_settings_commented_out() {
    let template = generate_config_template();
    assert!(template.contains("# strict = true"));
    assert!(template.contains("# include-paths"));

    let config: Config = toml::from_str(&template).unwrap();
    assert!(!config.check.strict);
    assert_eq!(config.rules.no_hungarian_notation, RuleLevel::Error);
}

#[test]
fn init_creates_the_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".style-guard.toml");

    let args = InitArgs {
        output: path.clone(),
        force: false,
    };
    assert_eq!(run_init(&args), EXIT_SUCCESS);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, generate_config_template());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".style-guard.toml");
    std::fs::write(&path, "# existing\n").unwrap();

    let args = InitArgs {
        output: path.clone(),
        force: false,
    };
    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);

    // The original file is untouched.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing\n");
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".style-guard.toml");
    std::fs::write(&path, "# existing\n").unwrap();

    let args = InitArgs {
        output: path.clone(),
        force: true,
    };
    assert_eq!(run_init(&args), EXIT_SUCCESS);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("version = 1"));
}

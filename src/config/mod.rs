mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{
    CONFIG_VERSION, CheckConfig, Config, ConstructorNameConfig, RuleLevel, RuleLevels, ScanConfig,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.scan.extensions.contains(&"js".to_string()));
        assert!(config.scan.gitignore);
        assert!(!config.check.strict);
    }

    #[test]
    fn rule_levels_default_severities() {
        let levels = RuleLevels::default();
        assert_eq!(levels.no_hungarian_notation, RuleLevel::Error);
        assert_eq!(levels.no_comment_separators, RuleLevel::Warn);
        assert_eq!(levels.starred_block_comments, RuleLevel::Warn);
        assert_eq!(levels.no_constructor_name, RuleLevel::Error);
    }
}

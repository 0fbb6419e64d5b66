use crate::cli::RulesArgs;
use crate::config::RuleLevels;
use crate::rules::{Rule, builtin_rules};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_rules(args: &RulesArgs) -> i32 {
    args.rule.as_deref().map_or_else(list_rules, explain_rule)
}

fn default_level(defaults: &RuleLevels, rule: &dyn Rule) -> &'static str {
    defaults
        .level_for(rule.name())
        .map_or("off", crate::config::RuleLevel::as_str)
}

fn list_rules() -> i32 {
    let rules = builtin_rules();
    let defaults = RuleLevels::default();
    let name_width = rules
        .iter()
        .map(|rule| rule.name().len())
        .max()
        .unwrap_or(0);

    for rule in &rules {
        let level = default_level(&defaults, rule.as_ref());
        let fixable = if rule.fixable() { "fixable" } else { "" };
        println!(
            "{:<name_width$}  {level:<5}  {fixable:<7}  {}",
            rule.name(),
            rule.summary()
        );
    }

    EXIT_SUCCESS
}

fn explain_rule(name: &str) -> i32 {
    let rules = builtin_rules();
    let Some(rule) = rules.iter().find(|rule| rule.name() == name) else {
        eprintln!("Error: unknown rule '{name}'");
        eprintln!("Run 'style-guard rules' to list the available rules.");
        return EXIT_CONFIG_ERROR;
    };

    let defaults = RuleLevels::default();

    println!("{} - {}", rule.name(), rule.summary());
    println!();
    println!("{}", rule.explanation());
    println!();
    println!("Default level: {}", default_level(&defaults, rule.as_ref()));
    if rule.fixable() {
        println!("Supports automatic fixing with 'check --fix'.");
    }

    EXIT_SUCCESS
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;

//! `check` command: compile every table and rule set, touch nothing.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::args::{Cli, ReportFormat};
use super::run::build_table;
use crate::config::RelabelConfig;
use crate::dict::Dictionary;
use crate::log;
use crate::rule::Occurrence;
use crate::transform::{Pass, inject_pass, restructure_pass};
use crate::utils::plural_count;

#[derive(Debug, Serialize)]
struct CheckReport {
    root: String,
    root_exists: bool,
    rule_sets: Vec<RuleSetSummary>,
    dictionaries: Vec<DictionarySummary>,
}

#[derive(Debug, Serialize)]
struct RuleSetSummary {
    pass: String,
    name: String,
    rules: Vec<RuleSummary>,
}

#[derive(Debug, Serialize)]
struct RuleSummary {
    name: String,
    occurrence: Occurrence,
}

#[derive(Debug, Serialize)]
struct DictionarySummary {
    name: &'static str,
    phrases: usize,
    overlaps: Vec<String>,
}

/// Validate configured rule sets and dictionaries.
///
/// Any invalid table or rule is returned as an error.
pub fn check(cli: &Cli, config: &RelabelConfig) -> Result<()> {
    let passes = [
        inject_pass(&config.inject.script, &config.inject.anchors)
            .context("invalid injection rules")?,
        restructure_pass().context("invalid restructuring rules")?,
    ];

    let mut dictionaries = Vec::new();
    for dictionary in [config.translate.dictionary, config.translate.complete_dictionary] {
        if dictionaries
            .iter()
            .any(|d: &DictionarySummary| d.name == dictionary.name())
        {
            continue;
        }
        dictionaries.push(summarize(config, dictionary)?);
    }

    let report = CheckReport {
        root: config.root.display().to_string(),
        root_exists: config.root.is_dir(),
        rule_sets: passes.iter().flat_map(rule_sets).collect(),
        dictionaries,
    };

    match cli.format {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{json}");
        }
        ReportFormat::Human => print_human(&report),
    }
    Ok(())
}

fn rule_sets(pass: &Pass) -> Vec<RuleSetSummary> {
    pass.rule_sets()
        .iter()
        .map(|set| RuleSetSummary {
            pass: pass.kind().to_string(),
            name: set.name().to_string(),
            rules: set
                .rules()
                .iter()
                .map(|r| RuleSummary {
                    name: r.name.clone(),
                    occurrence: r.occurrence(),
                })
                .collect(),
        })
        .collect()
}

fn summarize(config: &RelabelConfig, dictionary: Dictionary) -> Result<DictionarySummary> {
    let table = build_table(config, dictionary)?;
    Ok(DictionarySummary {
        name: dictionary.name(),
        phrases: table.len(),
        overlaps: table.issues().iter().map(ToString::to_string).collect(),
    })
}

fn print_human(report: &CheckReport) {
    if report.root_exists {
        log!("check"; "root {}", report.root);
    } else {
        log!("warning"; "root {} does not exist", report.root);
    }

    for set in &report.rule_sets {
        // `*` marks rules that replace every occurrence
        let rules: Vec<_> = set
            .rules
            .iter()
            .map(|r| match r.occurrence {
                Occurrence::All => format!("{}*", r.name),
                Occurrence::First => r.name.clone(),
            })
            .collect();
        println!(
            "{} {} {}",
            format!("[{}]", set.pass).bright_blue().bold(),
            set.name,
            format!("({})", rules.join(" → ")).dimmed()
        );
    }

    for dict in &report.dictionaries {
        println!(
            "{} {}, {}",
            format!("[{}]", dict.name).bright_blue().bold(),
            plural_count(dict.phrases, "phrase"),
            plural_count(dict.overlaps.len(), "overlap")
        );
        for overlap in &dict.overlaps {
            println!("  {} {}", "·".dimmed(), overlap);
        }
    }

    println!("{}", "all tables and rule sets are valid".green());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_check_defaults() {
        let cli = Cli::parse_from(["relabel", "--format", "json", "check"]);
        assert!(check(&cli, &RelabelConfig::default()).is_ok());
    }

    #[test]
    fn test_rule_set_summary() {
        let pass = restructure_pass().unwrap();
        let sets = rule_sets(&pass);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].name, "remove-create-link");
        assert_eq!(sets[1].pass, "restructure");
        let names: Vec<_> = sets[1].rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["with-class", "bare"]);
        assert!(sets[1].rules.iter().all(|r| r.occurrence == Occurrence::All));

        let inject = inject_pass("js/guard.js", &["js/auth.js".to_string()]).unwrap();
        let sets = rule_sets(&inject);
        assert_eq!(sets[0].rules[0].name, "before-js/auth.js");
        assert_eq!(sets[0].rules[0].occurrence, Occurrence::First);
        assert_eq!(sets[0].pass, "inject");
    }

    #[test]
    fn test_check_rejects_overlaps_under_reject_policy() {
        let cli = Cli::parse_from(["relabel", "check"]);
        let mut config = RelabelConfig::default();
        config.translate.overlap = crate::translate::OverlapPolicy::Reject;
        assert!(check(&cli, &config).is_err());
    }
}

//! Batch report formatting.
//!
//! Human output is one line per document plus a summary per pass; JSON
//! output is a single document holding every pass.

use std::fmt;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::batch::{BatchReport, Totals, TransformResult};
use crate::transform::Outcome;
use crate::utils::plural_count;

/// Print one pass report in human form to stdout.
pub fn print_human(report: &BatchReport) {
    let header = format!("[{}]", report.pass);
    let mode = if report.dry_run { " (dry run)" } else { "" };
    println!(
        "{} {}{}",
        header.bright_blue().bold(),
        plural_count(report.results.len(), "document"),
        mode.dimmed()
    );

    for result in &report.results {
        println!("  {}", ResultLine(result));
    }
    println!("  {}", Summary(report.totals()));
}

/// Print every pass report as one JSON document to stdout.
pub fn print_json(reports: &[BatchReport]) -> serde_json::Result<()> {
    println!("{}", to_json(reports)?);
    Ok(())
}

fn to_json(reports: &[BatchReport]) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct PassJson<'a> {
        #[serde(flatten)]
        report: &'a BatchReport,
        totals: Totals,
    }

    #[derive(Serialize)]
    struct RunJson<'a> {
        failed: bool,
        passes: Vec<PassJson<'a>>,
    }

    let run = RunJson {
        failed: reports.iter().any(BatchReport::has_failures),
        passes: reports
            .iter()
            .map(|report| PassJson {
                report,
                totals: report.totals(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&run)
}

struct ResultLine<'a>(&'a TransformResult);

impl fmt::Display for ResultLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let label = r.reason.label();
        match r.reason {
            Outcome::Applied => write!(f, "{} {} {}", "✓".green(), r.document, label.green())?,
            Outcome::AlreadyPresent | Outcome::NoPatternMatch => {
                write!(f, "{} {} {}", "·".dimmed(), r.document, label.dimmed())?
            }
            Outcome::Missing => write!(f, "{} {} {}", "?".yellow(), r.document, label.yellow())?,
            Outcome::ReadFailed | Outcome::WriteFailed => {
                write!(f, "{} {} {}", "✗".red(), r.document, label.red().bold())?
            }
        }
        if let Some(detail) = &r.detail {
            write!(f, " {}", format!("({detail})").dimmed())?;
        }
        Ok(())
    }
}

struct Summary(Totals);

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        let mut parts = vec![format!("{} applied", t.applied)];
        for (count, label) in [
            (t.already_present, Outcome::AlreadyPresent.label()),
            (t.no_pattern_match, Outcome::NoPatternMatch.label()),
            (t.missing, Outcome::Missing.label()),
            (t.read_failed, Outcome::ReadFailed.label()),
            (t.write_failed, Outcome::WriteFailed.label()),
        ] {
            if count > 0 {
                parts.push(format!("{count} {label}"));
            }
        }

        let failures = t.read_failed + t.write_failed;
        if failures > 0 {
            write!(f, "{} {}", "→".red(), parts.join(", "))
        } else {
            write!(f, "{} {}", "→".green(), parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::PassKind;

    fn report() -> BatchReport {
        BatchReport {
            pass: PassKind::Translate,
            dry_run: true,
            results: vec![
                TransformResult {
                    document: "login.html".into(),
                    applied: true,
                    reason: Outcome::Applied,
                    detail: Some("3 strings".into()),
                },
                TransformResult {
                    document: "admin.html".into(),
                    applied: false,
                    reason: Outcome::Missing,
                    detail: None,
                },
            ],
        }
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&[report()]).unwrap()).unwrap();
        assert_eq!(json["failed"], false);

        let pass = &json["passes"][0];
        assert_eq!(pass["pass"], "translate");
        assert_eq!(pass["dry_run"], true);
        assert_eq!(pass["results"][0]["reason"], "applied");
        assert_eq!(pass["results"][0]["detail"], "3 strings");
        assert_eq!(pass["results"][1]["reason"], "missing");
        assert!(pass["results"][1].get("detail").is_none());
        assert_eq!(pass["totals"]["applied"], 1);
        assert_eq!(pass["totals"]["missing"], 1);
    }

    #[test]
    fn test_summary_lists_nonzero_outcomes() {
        let summary = Summary(report().totals()).to_string();
        assert!(summary.contains("1 applied"));
        assert!(summary.contains("1 missing"));
        assert!(!summary.contains("write failed"));
    }

    #[test]
    fn test_result_line_detail() {
        let r = report();
        let line = ResultLine(&r.results[0]).to_string();
        assert!(line.contains("login.html"));
        assert!(line.contains("3 strings"));
    }
}

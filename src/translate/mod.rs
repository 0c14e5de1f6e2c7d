//! Phrase translation tables.
//!
//! A [`TranslationTable`] is an immutable source → target mapping compiled
//! once per run into one alternation regex per [`Context`]. Alternatives are
//! ordered longest first, so when two source phrases overlap (one contains
//! the other) the longer one wins at any given position and a span is
//! translated at most once per context.
//!
//! # Validation
//!
//! | Issue     | Meaning                                     | Policy            |
//! |-----------|---------------------------------------------|-------------------|
//! | duplicate | same source, different targets             | always an error   |
//! | overlap   | a source is a substring of another source   | `OverlapPolicy`   |
//! | chain     | a target is itself another entry's source   | always an error   |
//!
//! A chain would make the pass non-idempotent: the second run would
//! translate the first run's output again.

mod context;

pub use context::Context;

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use context::ContextPattern;

/// What to do when one source phrase is a substring of another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Resolve deterministically, longest phrase first.
    #[default]
    LongestFirst,
    /// Treat any overlap as a configuration error.
    Reject,
}

/// Translation table errors.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("empty source phrase (target `{target}`)")]
    EmptySource { target: String },

    #[error("`{phrase}` is translated both as `{first}` and `{second}`")]
    DuplicateSource {
        phrase: String,
        first: String,
        second: String,
    },

    #[error("ambiguous overlap: `{shorter}` is part of `{longer}`")]
    Overlap { shorter: String, longer: String },

    #[error("`{phrase}` translates to `{target}`, which is itself translated again")]
    Chain { phrase: String, target: String },

    #[error("failed to compile translation patterns")]
    Pattern(#[from] regex::Error),
}

/// A single source → target phrase pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationEntry {
    pub source: String,
    pub target: String,
}

/// Non-fatal (under the active policy) table finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    Overlap { shorter: String, longer: String },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlap { shorter, longer } => {
                write!(f, "`{shorter}` is part of `{longer}` (longest wins)")
            }
        }
    }
}

/// Outcome of translating one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub changed: bool,
    /// Number of translated spans.
    pub replaced: usize,
}

/// Validated, compiled phrase table.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    lookup: FxHashMap<String, String>,
    patterns: Vec<ContextPattern>,
    issues: Vec<TableIssue>,
}

impl TranslationTable {
    /// Validate and compile a table.
    ///
    /// Identical duplicate pairs collapse; conflicting duplicates, chains and
    /// (under [`OverlapPolicy::Reject`]) overlaps are errors.
    pub fn new<I, S, T>(entries: I, policy: OverlapPolicy) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut lookup: FxHashMap<String, String> = FxHashMap::default();
        for (source, target) in entries {
            let (source, target) = (source.into(), target.into());
            if source.is_empty() {
                return Err(TableError::EmptySource { target });
            }
            if let Some(existing) = lookup.get(&source) {
                if *existing != target {
                    return Err(TableError::DuplicateSource {
                        first: existing.clone(),
                        second: target,
                        phrase: source,
                    });
                }
                continue;
            }
            lookup.insert(source, target);
        }

        let mut entries: Vec<_> = lookup
            .iter()
            .map(|(source, target)| TranslationEntry {
                source: source.clone(),
                target: target.clone(),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.source
                .len()
                .cmp(&a.source.len())
                .then_with(|| a.source.cmp(&b.source))
        });

        check_chains(&entries, &lookup)?;
        let issues = find_overlaps(&entries);
        if policy == OverlapPolicy::Reject
            && let Some(TableIssue::Overlap { shorter, longer }) = issues.first()
        {
            return Err(TableError::Overlap {
                shorter: shorter.clone(),
                longer: longer.clone(),
            });
        }

        let mut patterns = Vec::new();
        for context in Context::ALL {
            patterns.extend(ContextPattern::compile(context, &entries)?);
        }

        Ok(Self {
            lookup,
            patterns,
            issues,
        })
    }

    /// Number of distinct source phrases.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Findings tolerated by the active policy.
    pub fn issues(&self) -> &[TableIssue] {
        &self.issues
    }

    /// Translate every known phrase in every context.
    pub fn translate(&self, text: &str) -> Translation {
        let mut current: Option<String> = None;
        let mut replaced = 0;

        for pattern in &self.patterns {
            let input = current.as_deref().unwrap_or(text);
            if let Some((next, count)) =
                pattern.replace(input, |phrase: &str| self.lookup.get(phrase).map(String::as_str))
            {
                replaced += count;
                current = Some(next);
            }
        }

        match current {
            Some(new_text) if new_text != text => Translation {
                text: new_text,
                changed: true,
                replaced,
            },
            _ => Translation {
                text: text.to_string(),
                changed: false,
                replaced: 0,
            },
        }
    }
}

/// Reject targets that are sources of a different translation.
fn check_chains(
    entries: &[TranslationEntry],
    lookup: &FxHashMap<String, String>,
) -> Result<(), TableError> {
    for entry in entries {
        if entry.source == entry.target {
            continue;
        }
        if let Some(next) = lookup.get(&entry.target)
            && *next != entry.target
        {
            return Err(TableError::Chain {
                phrase: entry.source.clone(),
                target: entry.target.clone(),
            });
        }
    }
    Ok(())
}

/// Every (shorter, longer) pair where the shorter source occurs inside the longer.
fn find_overlaps(entries: &[TranslationEntry]) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    for (i, longer) in entries.iter().enumerate() {
        for shorter in &entries[i + 1..] {
            if longer.source.contains(shorter.source.as_str()) {
                issues.push(TableIssue::Overlap {
                    shorter: shorter.source.clone(),
                    longer: longer.source.clone(),
                });
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> TranslationTable {
        TranslationTable::new(entries.iter().copied(), OverlapPolicy::LongestFirst).unwrap()
    }

    #[test]
    fn test_translate_example() {
        let t = table(&[("Login", "Accedi")]);
        let first = t.translate("<a>Login</a>");
        assert!(first.changed);
        assert_eq!(first.text, "<a>Accedi</a>");

        let second = t.translate(&first.text);
        assert!(!second.changed);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn test_exact_phrase_boundary() {
        let t = table(&[("Login", "Accedi")]);
        let out = t.translate("<a>Login</a><a>LoginPage</a>");
        assert_eq!(out.text, "<a>Accedi</a><a>LoginPage</a>");
        assert_eq!(out.replaced, 1);
    }

    #[test]
    fn test_all_contexts() {
        let t = table(&[("Cancel", "Annulla"), ("Dashboard", "Bacheca")]);
        let input = concat!(
            "<title>Dashboard - App</title>",
            "<button title=\"Cancel\">Cancel</button>",
            "<script>confirm('Cancel')</script>",
        );
        let out = t.translate(input);
        assert_eq!(
            out.text,
            concat!(
                "<title>Bacheca - App</title>",
                "<button title=\"Annulla\">Annulla</button>",
                "<script>confirm('Annulla')</script>",
            )
        );
        assert_eq!(out.replaced, 4);
    }

    #[test]
    fn test_longest_first_in_title() {
        let t = table(&[
            ("Session Scheduler", "Pianificatore Sessioni"),
            ("D&D Session Scheduler", "Pianificatore Sessioni D&D"),
        ]);
        let out = t.translate("<title>Bacheca - D&D Session Scheduler</title>");
        assert_eq!(out.text, "<title>Bacheca - Pianificatore Sessioni D&D</title>");
    }

    #[test]
    fn test_overlap_reported_not_fatal_by_default() {
        let t = table(&[("Manage", "Gestisci"), ("Manage Sessions", "Gestisci Sessioni")]);
        assert_eq!(
            t.issues(),
            &[TableIssue::Overlap {
                shorter: "Manage".to_string(),
                longer: "Manage Sessions".to_string(),
            }]
        );
        let out = t.translate("<h2>Manage Sessions</h2><a>Manage</a>");
        assert_eq!(out.text, "<h2>Gestisci Sessioni</h2><a>Gestisci</a>");
    }

    #[test]
    fn test_overlap_rejected_under_reject_policy() {
        let err = TranslationTable::new(
            [("Save", "Salva"), ("Save Draft", "Salva Bozza")],
            OverlapPolicy::Reject,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Overlap { ref shorter, .. } if shorter == "Save"));
    }

    #[test]
    fn test_duplicate_source() {
        let err = TranslationTable::new(
            [("Join Session", "Partecipa"), ("Join Session", "Partecipa alla Sessione")],
            OverlapPolicy::LongestFirst,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateSource { .. }));

        // Identical pairs collapse.
        let t = table(&[("Create Account", "Crea Account"), ("Create Account", "Crea Account")]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_chain_rejected() {
        let err = TranslationTable::new(
            [("Admin", "Manage"), ("Manage", "Gestisci")],
            OverlapPolicy::LongestFirst,
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Chain { ref phrase, .. } if phrase == "Admin"));
    }

    #[test]
    fn test_identity_entries_allowed() {
        let t = table(&[("Password", "Password"), ("Email", "Email")]);
        let out = t.translate("<label>Password</label>");
        assert!(!out.changed);
        assert_eq!(out.replaced, 0);
    }

    #[test]
    fn test_empty_source_rejected() {
        assert!(matches!(
            TranslationTable::new([("", "x")], OverlapPolicy::LongestFirst),
            Err(TableError::EmptySource { .. })
        ));
    }

    #[test]
    fn test_empty_table_is_noop() {
        let t = TranslationTable::new(Vec::<(String, String)>::new(), OverlapPolicy::Reject)
            .unwrap();
        assert_eq!(t.len(), 0);
        assert!(!t.translate("<a>Login</a>").changed);
    }
}

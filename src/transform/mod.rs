//! Document transformers.
//!
//! A [`Pass`] bundles an idempotency [`Guard`] with either ordered rule sets
//! (injection, restructuring) or a translation table. Passes hold no
//! per-document state; [`Pass::apply`] is a pure function of the input text.
//!
//! # Modules
//!
//! - `guard`: marker / target-form pre-checks
//! - `inject`: protection script injection rules
//! - `restructure`: navigation cleanup rules

mod guard;
mod inject;
mod restructure;

pub use guard::Guard;
pub use inject::inject_pass;
pub use restructure::restructure_pass;

use std::fmt;

use serde::Serialize;

use crate::rule::RuleSet;
use crate::translate::TranslationTable;

/// Which transformation a pass performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassKind {
    Inject,
    Translate,
    Restructure,
}

impl PassKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inject => "inject",
            Self::Translate => "translate",
            Self::Restructure => "restructure",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final state of one document after one pass.
///
/// Every document ends in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Text changed (and was written back unless dry-run).
    Applied,
    /// Guard found the document already rewritten.
    AlreadyPresent,
    /// No rule matched / nothing to translate.
    NoPatternMatch,
    /// Identifier does not resolve to an existing file.
    Missing,
    /// File exists but could not be read as UTF-8 text.
    ReadFailed,
    /// New text could not be persisted.
    WriteFailed,
}

impl Outcome {
    #[inline]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::ReadFailed | Self::WriteFailed)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::AlreadyPresent => "already present",
            Self::NoPatternMatch => "no pattern match",
            Self::Missing => "missing",
            Self::ReadFailed => "read failed",
            Self::WriteFailed => "write failed",
        }
    }
}

/// Result of running a pass over a single document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// `Applied`, `AlreadyPresent` or `NoPatternMatch`.
    pub outcome: Outcome,
    /// New text, only when it differs from the input.
    pub text: Option<String>,
    /// Human detail (winning rules, translated string count).
    pub detail: Option<String>,
}

impl Rewrite {
    fn skipped(outcome: Outcome) -> Self {
        Self {
            outcome,
            text: None,
            detail: None,
        }
    }
}

#[derive(Debug, Clone)]
enum Engine {
    Rules(Vec<RuleSet>),
    Table(TranslationTable),
}

/// One transformation intent group, ready to run over many documents.
#[derive(Debug, Clone)]
pub struct Pass {
    kind: PassKind,
    guard: Guard,
    engine: Engine,
}

impl Pass {
    /// Rule-driven pass: each rule set is evaluated first-match-wins, in order.
    pub fn rules(kind: PassKind, guard: Guard, sets: Vec<RuleSet>) -> Self {
        Self {
            kind,
            guard,
            engine: Engine::Rules(sets),
        }
    }

    /// Translation pass. Relies on content equality instead of a guard.
    pub fn translate(table: TranslationTable) -> Self {
        Self {
            kind: PassKind::Translate,
            guard: Guard::None,
            engine: Engine::Table(table),
        }
    }

    pub fn kind(&self) -> PassKind {
        self.kind
    }

    /// Rule sets of a rule-driven pass (empty for translation).
    pub fn rule_sets(&self) -> &[RuleSet] {
        match &self.engine {
            Engine::Rules(sets) => sets,
            Engine::Table(_) => &[],
        }
    }

    /// Run the pass over one document's text.
    pub fn apply(&self, text: &str) -> Rewrite {
        if self.guard.check(text) {
            return Rewrite::skipped(Outcome::AlreadyPresent);
        }

        match &self.engine {
            Engine::Rules(sets) => apply_rule_sets(sets, text),
            Engine::Table(table) => {
                let translation = table.translate(text);
                if !translation.changed {
                    return Rewrite::skipped(Outcome::NoPatternMatch);
                }
                Rewrite {
                    outcome: Outcome::Applied,
                    detail: Some(crate::utils::plural_count(translation.replaced, "string")),
                    text: Some(translation.text),
                }
            }
        }
    }
}

/// Apply every intent's rule set in turn, each first-match-wins.
fn apply_rule_sets(sets: &[RuleSet], text: &str) -> Rewrite {
    let mut current: Option<String> = None;
    let mut winners = Vec::new();

    for set in sets {
        let input = current.as_deref().unwrap_or(text);
        if let Some(applied) = set.apply(input) {
            winners.push(format!("{}/{}", set.name(), applied.rule));
            current = Some(applied.text);
        }
    }

    match current {
        Some(new_text) if new_text != text => Rewrite {
            outcome: Outcome::Applied,
            text: Some(new_text),
            detail: Some(winners.join(", ")),
        },
        _ => Rewrite::skipped(Outcome::NoPatternMatch),
    }
}

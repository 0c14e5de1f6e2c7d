//! Span matchers used by rules and guards.
//!
//! A matcher only knows how to locate replaceable spans. Rule sets decide
//! *which* matcher wins, so the matching strategy can change (regex today,
//! a tag-aware tokenizer later) without touching rule-set semantics.

use std::borrow::Cow;
use std::fmt;

use regex::Regex;
use serde::Serialize;

use super::RuleError;

/// How many matches a single rule application replaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Occurrence {
    /// Replace the first match only.
    #[default]
    First,
    /// Replace every non-overlapping match.
    All,
}

impl Occurrence {
    /// Limit in the form `Regex::replacen` expects (0 = unlimited).
    #[inline]
    const fn limit(self) -> usize {
        match self {
            Self::First => 1,
            Self::All => 0,
        }
    }
}

/// Capability: locate replaceable spans in markup text.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Whether the matcher finds at least one span in `text`.
    fn is_match(&self, text: &str) -> bool;

    /// Replace matched spans with `template`.
    ///
    /// Returns `None` when nothing matched, so callers never have to compare
    /// the whole document to find out.
    fn replace(&self, text: &str, template: &str, occurrence: Occurrence) -> Option<String>;
}

// ============================================================================
// RegexMatcher
// ============================================================================

/// Regex-backed matcher. Templates may reference capture groups (`${1}`).
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile `pattern`, reporting the pattern text on failure.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|err| RuleError::Pattern {
            pattern: pattern.to_string(),
            source: err,
        })?;
        Ok(Self { regex })
    }
}

impl Matcher for RegexMatcher {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn replace(&self, text: &str, template: &str, occurrence: Occurrence) -> Option<String> {
        match self.regex.replacen(text, occurrence.limit(), template) {
            Cow::Borrowed(_) => None,
            Cow::Owned(replaced) => Some(replaced),
        }
    }
}

// ============================================================================
// LiteralMatcher
// ============================================================================

/// Exact substring matcher. The template is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatcher {
    needle: String,
}

impl LiteralMatcher {
    pub fn new(needle: impl Into<String>) -> Result<Self, RuleError> {
        let needle = needle.into();
        if needle.is_empty() {
            return Err(RuleError::EmptyLiteral);
        }
        Ok(Self { needle })
    }
}

impl Matcher for LiteralMatcher {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        text.contains(&self.needle)
    }

    fn replace(&self, text: &str, template: &str, occurrence: Occurrence) -> Option<String> {
        if !self.is_match(text) {
            return None;
        }
        Some(match occurrence {
            Occurrence::First => text.replacen(&self.needle, template, 1),
            Occurrence::All => text.replace(&self.needle, template),
        })
    }
}

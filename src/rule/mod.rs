//! Ordered rewrite rules.
//!
//! A [`Rule`] pairs a [`Matcher`] with a replacement template and a position.
//! A [`RuleSet`] holds the rules for one intent and evaluates them
//! first-match-wins: the first rule (by `order`) that matches is applied and
//! no later rule is tried.
//!
//! ```text
//! inject-script:  before-auth (0) → before-app (1) → before-body (2)
//!                 ^ applied if present, the rest never evaluated
//! ```

mod matcher;

pub use matcher::{LiteralMatcher, Matcher, Occurrence, RegexMatcher};

use std::sync::Arc;

use thiserror::Error;

/// Rule construction errors.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("literal matcher needs a non-empty needle")]
    EmptyLiteral,

    #[error("rule set `{set}` has no rules")]
    Empty { set: String },

    #[error("rule set `{set}`: rules `{first}` and `{second}` share order {order}")]
    DuplicateOrder {
        set: String,
        first: String,
        second: String,
        order: u32,
    },
}

// ============================================================================
// Rule
// ============================================================================

/// A single (matcher, template) pair with its evaluation position.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Short identifier used in reports (e.g. `before-auth`).
    pub name: String,
    /// Position inside the owning rule set; lower runs first.
    pub order: u32,
    matcher: Arc<dyn Matcher>,
    template: String,
    occurrence: Occurrence,
}

impl Rule {
    /// Create a rule replacing the first occurrence.
    pub fn new(
        name: impl Into<String>,
        order: u32,
        matcher: impl Matcher + 'static,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            order,
            matcher: Arc::new(matcher),
            template: template.into(),
            occurrence: Occurrence::First,
        }
    }

    /// Shorthand for a regex-backed rule.
    pub fn regex(
        name: impl Into<String>,
        order: u32,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Ok(Self::new(name, order, RegexMatcher::new(pattern)?, template))
    }

    /// Replace every occurrence instead of the first one.
    pub fn replace_all(mut self) -> Self {
        self.occurrence = Occurrence::All;
        self
    }

    pub fn occurrence(&self) -> Occurrence {
        self.occurrence
    }

    /// Apply this rule alone. `None` when the matcher found nothing.
    #[inline]
    pub fn apply(&self, text: &str) -> Option<String> {
        self.matcher.replace(text, &self.template, self.occurrence)
    }
}

// ============================================================================
// RuleSet
// ============================================================================

/// Immutable, ordered sequence of rules for one transformation intent.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

/// A rule set application that matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Name of the rule that won.
    pub rule: String,
    /// Rewritten text.
    pub text: String,
}

impl RuleSet {
    /// Build a rule set, sorting by `order`.
    ///
    /// `order` must be a strict total order inside the set.
    pub fn new(name: impl Into<String>, mut rules: Vec<Rule>) -> Result<Self, RuleError> {
        let name = name.into();
        if rules.is_empty() {
            return Err(RuleError::Empty { set: name });
        }

        rules.sort_by_key(|rule| rule.order);
        if let Some(pair) = rules.windows(2).find(|w| w[0].order == w[1].order) {
            return Err(RuleError::DuplicateOrder {
                order: pair[0].order,
                first: pair[0].name.clone(),
                second: pair[1].name.clone(),
                set: name,
            });
        }

        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate first-match-wins.
    pub fn apply(&self, text: &str) -> Option<Applied> {
        self.rules.iter().find_map(|rule| {
            rule.apply(text).map(|text| Applied {
                rule: rule.name.clone(),
                text,
            })
        })
    }
}

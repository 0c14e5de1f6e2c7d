//! Idempotency guards.
//!
//! A guard answers "has this document already been rewritten?" before any
//! rule runs, so a second run can never insert twice even when an anchor
//! would still match.

use std::sync::Arc;

use crate::rule::Matcher;

/// Pre-check run before a pass touches a document.
#[derive(Debug, Clone, Default)]
pub enum Guard {
    /// Never short-circuits (the translation pass relies on content equality).
    #[default]
    None,
    /// Present when the marker matches anywhere in the text.
    Marker(Arc<dyn Matcher>),
    /// Present when every `present` matcher matches and no `absent` one does.
    TargetForm {
        present: Vec<Arc<dyn Matcher>>,
        absent: Vec<Arc<dyn Matcher>>,
    },
}

impl Guard {
    /// Whether the document is already in its rewritten form.
    pub fn check(&self, text: &str) -> bool {
        match self {
            Self::None => false,
            Self::Marker(marker) => marker.is_match(text),
            Self::TargetForm { present, absent } => {
                present.iter().all(|m| m.is_match(text))
                    && !absent.iter().any(|m| m.is_match(text))
            }
        }
    }
}

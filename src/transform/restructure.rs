//! Navigation restructuring.
//!
//! Two intents, each its own rule set:
//!
//! - `remove-create-link`: drop the "create poll" entry from the navigation
//!   (whole line, indentation and line break included)
//! - `tag-manage-link`: add `id="nav-manage"` to the "manage" entry so the
//!   protection script can hide it, translating an English label on the way
//!
//! Rules replace every occurrence: pages that repeat the navigation (mobile
//! menu) are fully rewritten in a single run.

use std::sync::Arc;

use super::{Guard, Pass, PassKind};
use crate::rule::{LiteralMatcher, Matcher, RegexMatcher, Rule, RuleError, RuleSet};

/// Marker attribute carried by the tagged manage link.
pub const MANAGE_ID: &str = r#"id="nav-manage""#;

const CREATE_LINK: &str = r#"<a href="create-poll\.html"[^>]*>(?:Crea Sondaggio|Create Poll)</a>"#;

/// Build the restructuring pass.
pub fn restructure_pass() -> Result<Pass, RuleError> {
    let remove = RuleSet::new(
        "remove-create-link",
        vec![
            Rule::regex(
                "create-poll-link",
                0,
                &format!(r"[ \t]*{CREATE_LINK}[ \t]*(?:\r?\n)?"),
                "",
            )?
            .replace_all(),
        ],
    )?;

    let tag = RuleSet::new(
        "tag-manage-link",
        vec![
            Rule::regex(
                "with-class",
                0,
                r#"<a href="manage\.html"([^>]*class="[^"]*")>(?:Gestisci|Manage)</a>"#,
                format!(r#"<a href="manage.html"${{1}} {MANAGE_ID}>Gestisci</a>"#),
            )?
            .replace_all(),
            Rule::regex(
                "bare",
                1,
                r#"<a href="manage\.html">(?:Gestisci|Manage)</a>"#,
                format!(r#"<a href="manage.html" {MANAGE_ID}>Gestisci</a>"#),
            )?
            .replace_all(),
        ],
    )?;

    let guard = Guard::TargetForm {
        present: vec![Arc::new(LiteralMatcher::new(MANAGE_ID)?) as Arc<dyn Matcher>],
        absent: vec![Arc::new(RegexMatcher::new(CREATE_LINK)?) as Arc<dyn Matcher>],
    };

    Ok(Pass::rules(PassKind::Restructure, guard, vec![remove, tag]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Outcome;

    const NAV: &str = r#"<nav>
            <a href="dashboard.html" class="nav-link">Bacheca</a>
            <a href="create-poll.html" class="nav-link">Crea Sondaggio</a>
            <a href="manage.html" class="nav-link">Gestisci</a>
        </nav>"#;

    const NAV_DONE: &str = r#"<nav>
            <a href="dashboard.html" class="nav-link">Bacheca</a>
            <a href="manage.html" class="nav-link" id="nav-manage">Gestisci</a>
        </nav>"#;

    #[test]
    fn test_restructure_nav() {
        let rewrite = restructure_pass().unwrap().apply(NAV);
        assert_eq!(rewrite.outcome, Outcome::Applied);
        assert_eq!(rewrite.text.as_deref(), Some(NAV_DONE));
        assert_eq!(
            rewrite.detail.as_deref(),
            Some("remove-create-link/create-poll-link, tag-manage-link/with-class")
        );
    }

    #[test]
    fn test_restructure_idempotent() {
        let pass = restructure_pass().unwrap();
        let once = pass.apply(NAV).text.unwrap();
        let twice = pass.apply(&once);
        assert_eq!(twice.outcome, Outcome::AlreadyPresent);
        assert!(twice.text.is_none());
    }

    #[test]
    fn test_english_labels() {
        let input = "<a href=\"create-poll.html\" class=\"btn\">Create Poll</a>\n<a href=\"manage.html\" class=\"btn\">Manage</a>";
        let out = restructure_pass().unwrap().apply(input).text.unwrap();
        assert_eq!(
            out,
            r#"<a href="manage.html" class="btn" id="nav-manage">Gestisci</a>"#
        );
    }

    #[test]
    fn test_repeated_navigation_rewritten_in_one_run() {
        let input = format!("{NAV}\n<div class=\"mobile\">{NAV}</div>");
        let pass = restructure_pass().unwrap();
        let out = pass.apply(&input).text.unwrap();
        assert!(!out.contains("create-poll.html"));
        assert_eq!(out.matches(MANAGE_ID).count(), 2);
        assert_eq!(pass.apply(&out).outcome, Outcome::AlreadyPresent);
    }

    #[test]
    fn test_bare_manage_link_fallback() {
        let out = restructure_pass()
            .unwrap()
            .apply(r#"<a href="manage.html">Manage</a>"#)
            .text
            .unwrap();
        assert_eq!(out, r#"<a href="manage.html" id="nav-manage">Gestisci</a>"#);
    }

    #[test]
    fn test_page_without_nav() {
        let rewrite = restructure_pass().unwrap().apply("<main>login</main>");
        assert_eq!(rewrite.outcome, Outcome::NoPatternMatch);
    }

    #[test]
    fn test_other_create_links_untouched() {
        let input = r#"<a href="create-poll.html" class="btn">Crea Nuova Campagna</a>"#;
        let rewrite = restructure_pass().unwrap().apply(input);
        assert_eq!(rewrite.outcome, Outcome::NoPatternMatch);
    }
}

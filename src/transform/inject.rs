//! Protection script injection (first-match-wins fallback chain).
//!
//! The dependency script must load before whatever uses it, so it is placed
//! immediately before the first known anchor script, falling back to the end
//! of `<body>` only when no anchor exists:
//!
//! ```text
//! before-js/auth.js → before-js/app.js → before-body
//! ```

use std::sync::Arc;

use regex::escape;

use super::{Guard, Pass, PassKind};
use crate::rule::{RegexMatcher, Rule, RuleError, RuleSet};

/// Build the injection pass for `script` (e.g. `js/nav-protection.js`).
///
/// `anchors` are script sources tried in order. The guard marker is the
/// script's file name as a whole path segment inside a quoted value, so a
/// page already referencing it from another directory is also left alone,
/// while `old-nav-protection.js` does not count.
pub fn inject_pass(script: &str, anchors: &[String]) -> Result<Pass, RuleError> {
    let tag = format!(r#"<script src="{}"></script>"#, escape_template(script));

    let mut rules = Vec::with_capacity(anchors.len() + 1);
    for (order, anchor) in (0u32..).zip(anchors) {
        let open = format!(r#"<script src="{anchor}">"#);
        rules.push(Rule::regex(
            format!("before-{anchor}"),
            order,
            &format!(r"([ \t]*){}", escape(&open)),
            format!("${{1}}{tag}\n${{1}}{}", escape_template(&open)),
        )?);
    }
    rules.push(Rule::regex(
        "before-body",
        u32::try_from(anchors.len()).unwrap_or(u32::MAX),
        r"([ \t]*)</body>",
        format!("${{1}}{tag}\n${{1}}</body>"),
    )?);

    let file_name = script.rsplit('/').next().unwrap_or(script);
    let marker = RegexMatcher::new(&format!(r#"["'/]{}["']"#, escape(file_name)))?;
    let set = RuleSet::new("inject-script", rules)?;

    Ok(Pass::rules(PassKind::Inject, Guard::Marker(Arc::new(marker)), vec![set]))
}

/// Make literal text safe inside a regex replacement template.
fn escape_template(text: &str) -> String {
    text.replace('$', "$$")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Outcome;

    fn pass() -> Pass {
        inject_pass(
            "js/nav-protection.js",
            &["js/auth.js".to_string(), "js/app.js".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_inserts_before_auth_not_body() {
        let input = r#"<script src="js/auth.js"></script></body>"#;
        let rewrite = pass().apply(input);

        assert_eq!(rewrite.outcome, Outcome::Applied);
        assert_eq!(
            rewrite.text.as_deref(),
            Some(
                "<script src=\"js/nav-protection.js\"></script>\n<script src=\"js/auth.js\"></script></body>"
            )
        );
        assert_eq!(
            rewrite.detail.as_deref(),
            Some("inject-script/before-js/auth.js")
        );
    }

    #[test]
    fn test_auth_preferred_over_app() {
        let input = "<script src=\"js/app.js\"></script>\n<script src=\"js/auth.js\"></script>\n</body>";
        let out = pass().apply(input).text.unwrap();
        assert_eq!(out.matches("nav-protection.js").count(), 1);
        assert!(out.contains(
            "<script src=\"js/nav-protection.js\"></script>\n<script src=\"js/auth.js\">"
        ));
    }

    #[test]
    fn test_app_anchor_keeps_indentation() {
        let input = "<body>\n    <script src=\"js/app.js\"></script>\n</body>";
        let out = pass().apply(input).text.unwrap();
        assert_eq!(
            out,
            "<body>\n    <script src=\"js/nav-protection.js\"></script>\n    <script src=\"js/app.js\"></script>\n</body>"
        );
    }

    #[test]
    fn test_body_fallback() {
        let input = "<body>\n  <p>hi</p>\n  </body>";
        let out = pass().apply(input).text.unwrap();
        assert_eq!(
            out,
            "<body>\n  <p>hi</p>\n  <script src=\"js/nav-protection.js\"></script>\n  </body>"
        );
    }

    #[test]
    fn test_no_anchor_no_change() {
        let rewrite = pass().apply("<div>fragment</div>");
        assert_eq!(rewrite.outcome, Outcome::NoPatternMatch);
    }

    #[test]
    fn test_idempotent() {
        let input = "<body>\n<script src=\"js/auth.js\"></script>\n</body>";
        let once = pass().apply(input).text.unwrap();
        let twice = pass().apply(&once);
        assert_eq!(twice.outcome, Outcome::AlreadyPresent);
        assert!(twice.text.is_none());
    }

    #[test]
    fn test_marker_is_file_name() {
        let input = r#"<script src="/static/js/nav-protection.js"></script></body>"#;
        assert_eq!(pass().apply(input).outcome, Outcome::AlreadyPresent);

        let bare = "<script src='nav-protection.js'></script></body>";
        assert_eq!(pass().apply(bare).outcome, Outcome::AlreadyPresent);
    }

    #[test]
    fn test_similar_script_name_is_not_marker() {
        let input = "<script src=\"js/old-nav-protection.js\"></script>\n<script src=\"js/auth.js\"></script>";
        let rewrite = pass().apply(input);
        assert_eq!(rewrite.outcome, Outcome::Applied);
        assert_eq!(
            rewrite.text.as_deref(),
            Some(concat!(
                "<script src=\"js/old-nav-protection.js\"></script>\n",
                "<script src=\"js/nav-protection.js\"></script>\n",
                "<script src=\"js/auth.js\"></script>",
            ))
        );
    }
}

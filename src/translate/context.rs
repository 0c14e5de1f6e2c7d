//! Syntactic contexts a phrase may be translated in.
//!
//! Matching is restricted to spans whose delimiters make them plain UI text,
//! so a phrase inside a tag name, a script identifier or a longer word is
//! never touched.

use regex::{Captures, Regex, escape};

use super::TranslationEntry;

/// Any character that does not continue a word. A title phrase must be
/// followed (or preceded) by one of these.
const NOT_WORD: &str = "[^A-Za-z0-9_]";

/// Where a phrase is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// `>PHRASE<`
    TagText,
    /// `"PHRASE"`
    DoubleQuoted,
    /// `'PHRASE'`
    SingleQuoted,
    /// `<title>PHRASE…` or `…PHRASE</title>` at a word boundary
    Title,
}

impl Context {
    /// Application order.
    pub const ALL: [Self; 4] = [
        Self::TagText,
        Self::DoubleQuoted,
        Self::SingleQuoted,
        Self::Title,
    ];

    /// `(pre, post)` delimiter patterns, one pair per sub-pattern.
    fn delimiters(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::TagText => &[(">", "<")],
            Self::DoubleQuoted => &[("\"", "\"")],
            Self::SingleQuoted => &[("'", "'")],
            Self::Title => &[("<title>", NOT_WORD), (NOT_WORD, "</title>")],
        }
    }

    /// Whether `target` can be written inside this context without closing
    /// its delimiter (`all'Avventura` must not land in a single-quoted value).
    fn accepts(self, target: &str) -> bool {
        match self {
            Self::DoubleQuoted => !target.contains('"'),
            Self::SingleQuoted => !target.contains('\''),
            Self::TagText | Self::Title => !target.contains('<'),
        }
    }
}

/// One compiled `(pre)(phrase alternation)(post)` regex.
#[derive(Debug, Clone)]
pub struct ContextPattern {
    regex: Regex,
}

impl ContextPattern {
    /// Compile every sub-pattern of `context` for `entries`.
    ///
    /// `entries` must already be in priority order (longest first): the
    /// regex engine is leftmost-first, so the earlier alternative wins when
    /// several phrases match at the same position.
    pub fn compile(context: Context, entries: &[TranslationEntry]) -> Result<Vec<Self>, regex::Error> {
        let phrases: Vec<_> = entries
            .iter()
            .filter(|e| context.accepts(&e.target))
            .map(|e| escape(&e.source))
            .collect();
        if phrases.is_empty() {
            return Ok(Vec::new());
        }
        let alternation = phrases.join("|");

        context
            .delimiters()
            .iter()
            .map(|(pre, post)| {
                let pattern = format!("(?P<pre>{pre})(?P<phrase>{alternation})(?P<post>{post})");
                Regex::new(&pattern).map(|regex| Self { regex })
            })
            .collect()
    }

    /// Replace every delimited phrase using `lookup`.
    ///
    /// Returns the rewritten text (if anything matched) and the number of
    /// replaced spans.
    pub fn replace<'a, F>(&self, text: &str, lookup: F) -> Option<(String, usize)>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut count = 0;
        let replaced = self.regex.replace_all(text, |caps: &Captures<'_>| {
            let phrase = &caps["phrase"];
            let target = lookup(phrase).unwrap_or(phrase);
            if target != phrase {
                count += 1;
            }
            format!("{}{}{}", &caps["pre"], target, &caps["post"])
        });

        match replaced {
            std::borrow::Cow::Owned(text) if count > 0 => Some((text, count)),
            _ => None,
        }
    }
}

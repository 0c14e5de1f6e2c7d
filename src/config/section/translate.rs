//! `[translate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [translate]
//! documents = ["index.html", "login.html"]   # fixed list for `relabel translate`
//! dictionary = "base"                        # built-in table for the fixed list
//! extension = "html"                         # discovery filter for `--complete`
//! recursive = false                          # descend into subdirectories
//! overlap = "longest-first"                  # or "reject"
//!
//! [translate.extra]                          # merged into both tables
//! "Settings" = "Impostazioni"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::validate_documents;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::dict::Dictionary;
use crate::translate::OverlapPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Pages translated by the fixed-list pass, relative to `site.root`.
    pub documents: Vec<String>,

    /// Built-in table for the fixed-list pass.
    pub dictionary: Dictionary,

    /// Built-in table for the discovered-pages pass.
    pub complete_dictionary: Dictionary,

    /// File extension (without dot) selecting pages for `--complete`.
    pub extension: String,

    /// Whether `--complete` descends into subdirectories.
    pub recursive: bool,

    /// Collision policy for overlapping source phrases.
    pub overlap: OverlapPolicy,

    /// Additional phrases, merged into the built-in table.
    pub extra: BTreeMap<String, String>,
}

impl TranslateConfig {
    pub const DOCUMENTS: FieldPath = FieldPath::new("translate.documents");
    pub const EXTENSION: FieldPath = FieldPath::new("translate.extension");
    pub const EXTRA: FieldPath = FieldPath::new("translate.extra");

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    /// Built-in phrases of `dictionary` followed by the configured extras.
    pub fn phrases(&self, dictionary: Dictionary) -> impl Iterator<Item = (String, String)> + '_ {
        dictionary
            .phrases()
            .iter()
            .map(|(s, t)| ((*s).to_string(), (*t).to_string()))
            .chain(self.extra.iter().map(|(s, t)| (s.clone(), t.clone())))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_documents(Self::DOCUMENTS, &self.documents, diag);

        if self.extension().is_empty() {
            diag.error_with_hint(Self::EXTENSION, "must not be empty", "e.g. \"html\"");
        }

        for (source, target) in &self.extra {
            if source.is_empty() {
                diag.error(Self::EXTRA, format!("empty source phrase for `{target}`"));
            }
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            documents: [
                "index.html",
                "dashboard.html",
                "create-poll.html",
                "participate.html",
                "login.html",
                "register.html",
                "admin.html",
                "profile.html",
            ]
            .map(String::from)
            .to_vec(),
            dictionary: Dictionary::Base,
            complete_dictionary: Dictionary::Complete,
            extension: "html".to_string(),
            recursive: false,
            overlap: OverlapPolicy::LongestFirst,
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_translate_defaults() {
        let config = test_parse_config("");
        let t = &config.translate;
        assert_eq!(t.documents.len(), 8);
        assert_eq!(t.dictionary, Dictionary::Base);
        assert_eq!(t.complete_dictionary, Dictionary::Complete);
        assert_eq!(t.extension(), "html");
        assert!(!t.recursive);
        assert_eq!(t.overlap, OverlapPolicy::LongestFirst);
    }

    #[test]
    fn test_translate_extra_and_policy() {
        let config = test_parse_config(
            "[translate]\noverlap = \"reject\"\nextension = \".htm\"\n[translate.extra]\n\"Settings\" = \"Impostazioni\"",
        );
        let t = &config.translate;
        assert_eq!(t.overlap, OverlapPolicy::Reject);
        assert_eq!(t.extension(), "htm");

        let phrases: Vec<_> = t.phrases(Dictionary::Complete).collect();
        assert_eq!(phrases.len(), Dictionary::Complete.phrases().len() + 1);
        assert!(phrases.contains(&("Settings".to_string(), "Impostazioni".to_string())));
    }

    #[test]
    fn test_translate_validation() {
        let config = test_parse_config("[translate]\nextension = \".\"\n[translate.extra]\n\"\" = \"x\"");
        let mut diag = ConfigDiagnostics::new();
        config.translate.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}

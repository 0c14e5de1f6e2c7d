//! `[inject]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [inject]
//! script = "js/nav-protection.js"           # script to insert
//! anchors = ["js/auth.js", "js/app.js"]     # insert before the first one found
//! documents = ["index.html", "dashboard.html"]
//! ```
//!
//! When no anchor script is present the tag is placed before `</body>`.

use serde::{Deserialize, Serialize};

use super::validate_documents;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectConfig {
    /// Script source inserted as `<script src="..."></script>`.
    pub script: String,

    /// Anchor script sources, most specific first.
    pub anchors: Vec<String>,

    /// Pages to process, relative to `site.root`.
    pub documents: Vec<String>,
}

impl InjectConfig {
    pub const SCRIPT: FieldPath = FieldPath::new("inject.script");
    pub const ANCHORS: FieldPath = FieldPath::new("inject.anchors");
    pub const DOCUMENTS: FieldPath = FieldPath::new("inject.documents");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.script.trim().is_empty() {
            diag.error(Self::SCRIPT, "must not be empty");
        } else if self.script.contains('"') {
            diag.error(Self::SCRIPT, "must not contain `\"`");
        }

        for anchor in &self.anchors {
            if anchor.trim().is_empty() {
                diag.error(Self::ANCHORS, "empty anchor entry");
            } else if *anchor == self.script {
                diag.error_with_hint(
                    Self::ANCHORS,
                    format!("`{anchor}` is the injected script itself"),
                    "anchors are the scripts that depend on it",
                );
            }
        }

        validate_documents(Self::DOCUMENTS, &self.documents, diag);
    }
}

impl Default for InjectConfig {
    fn default() -> Self {
        Self {
            script: "js/nav-protection.js".to_string(),
            anchors: vec!["js/auth.js".to_string(), "js/app.js".to_string()],
            documents: [
                "index.html",
                "dashboard.html",
                "participate.html",
                "manage.html",
                "admin.html",
                "profile.html",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

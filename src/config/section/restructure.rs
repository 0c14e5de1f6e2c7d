//! `[restructure]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [restructure]
//! documents = ["index.html", "dashboard.html", "create-poll.html"]
//! ```

use serde::{Deserialize, Serialize};

use super::validate_documents;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestructureConfig {
    /// Pages whose navigation is rewritten, relative to `site.root`.
    pub documents: Vec<String>,
}

impl RestructureConfig {
    pub const DOCUMENTS: FieldPath = FieldPath::new("restructure.documents");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_documents(Self::DOCUMENTS, &self.documents, diag);
    }
}

impl Default for RestructureConfig {
    fn default() -> Self {
        Self {
            documents: [
                "index.html",
                "dashboard.html",
                "participate.html",
                "manage.html",
                "admin.html",
                "profile.html",
                "create-poll.html",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_restructure_defaults_include_create_poll() {
        let config = test_parse_config("");
        assert!(config.restructure.documents.iter().any(|d| d == "create-poll.html"));
        assert_eq!(config.restructure.documents.len(), 7);
    }
}

//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! root = "static"     # directory holding the HTML pages, relative to relabel.toml
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page directory. `~` is expanded; relative paths are resolved against
    /// the directory containing the config file.
    pub root: PathBuf,
}

impl SiteConfig {
    pub const ROOT: FieldPath = FieldPath::new("site.root");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root.as_os_str().is_empty() {
            diag.error_with_hint(Self::ROOT, "must not be empty", "use \".\" for the config directory");
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_root() {
        let config = test_parse_config("[site]\nroot = \"public\"");
        assert_eq!(config.site.root.to_str(), Some("public"));
    }

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.root.to_str(), Some("static"));
    }
}

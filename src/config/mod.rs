//! Configuration management for `relabel.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── inject     # [inject]
//! │   ├── translate  # [translate]
//! │   └── restructure# [restructure]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config discovery, path expansion
//! └── mod.rs         # RelabelConfig (this file)
//! ```
//!
//! Every field has a default, so running without a config file works on a
//! project whose pages live in `static/` next to the cwd.

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, resolve_path};

pub use section::{InjectConfig, RestructureConfig, SiteConfig, TranslateConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "relabel.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing relabel.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelabelConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Resolved page directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub inject: InjectConfig,

    #[serde(default)]
    pub translate: TranslateConfig,

    #[serde(default)]
    pub restructure: RestructureConfig,
}

impl RelabelConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing default
    /// config falls back to built-in defaults relative to cwd; a missing
    /// explicit `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None if cli.config != Path::new(DEFAULT_CONFIG) => {
                return Err(ConfigError::NotFound(cli.config.clone()).into());
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                Self::default()
            }
        };

        config.validate()?;
        config.finalize(cli, &cwd);
        Ok(config)
    }

    /// Resolve the page directory: `--root` against cwd, `site.root`
    /// against the config directory.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        self.root = match &cli.root {
            Some(root) => resolve_path(root, cwd),
            None => resolve_path(&self.site.root, self.config_dir().unwrap_or(cwd)),
        };
    }

    /// Directory containing the config file.
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_path.as_deref().and_then(Path::parent)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.inject.validate(&mut diag);
        self.translate.validate(&mut diag);
        self.restructure.validate(&mut diag);

        if self.inject.documents.is_empty() {
            diag.warn(InjectConfig::DOCUMENTS, "no documents, `inject` has nothing to do");
        }
        if self.restructure.documents.is_empty() {
            diag.warn(RestructureConfig::DOCUMENTS, "no documents, `restructure` has nothing to do");
        }

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RelabelConfig {
    let (parsed, ignored) = RelabelConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("relabel").chain(args.iter().copied()).chain(["check"]))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(RelabelConfig::parse_with_ignored("[site\nroot = \"x\"").is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RelabelConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nroot = \"public\"\n[unknown_section]\nfield = \"value\"\n[inject]\nscritp = \"x\"";
        let (config, ignored) = RelabelConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.root, PathBuf::from("public"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
        assert!(ignored.iter().any(|f| f.contains("scritp")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\nroot = \"static\"\n[translate]\nrecursive = true";
        let (_, ignored) = RelabelConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = test_parse_config(
            "[inject]\nscript = \"\"\n[translate]\nextension = \"\"\n[restructure]\ndocuments = [\"/etc/passwd\"]",
        );
        let err = config.validate().unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_relative_to_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("relabel.toml");
        fs::write(&path, "[site]\nroot = \"public\"").unwrap();

        let mut config = RelabelConfig::from_path(&path).unwrap();
        config.config_path = Some(path);
        config.finalize(&cli(&[]), Path::new("/elsewhere"));
        assert_eq!(config.root, dir.path().join("public"));
    }

    #[test]
    fn test_cli_root_overrides() {
        let mut config = test_parse_config("[site]\nroot = \"public\"");
        config.finalize(&cli(&["--root", "build/site"]), Path::new("/work"));
        assert_eq!(config.root, PathBuf::from("/work/build/site"));
    }

    #[test]
    fn test_defaults_without_config_file() {
        let mut config = RelabelConfig::default();
        config.finalize(&cli(&[]), Path::new("/work"));
        assert_eq!(config.root, PathBuf::from("/work/static"));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = cli(&["--config", missing.to_str().unwrap()]);
        let err = RelabelConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }
}

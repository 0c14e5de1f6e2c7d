//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Idempotent rule-driven rewriting of static HTML pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: relabel.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "relabel.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Directory holding the HTML pages (overrides `site.root`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Compute every rewrite but leave files untouched
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Insert the navigation protection script into every configured page
    #[command(visible_alias = "i")]
    Inject,

    /// Translate English UI strings to Italian
    #[command(visible_alias = "t")]
    Translate {
        /// Translate every page found under the root with the complete dictionary
        #[arg(short, long)]
        complete: bool,
    },

    /// Remove the create-poll link and tag the manage link in navigation
    #[command(visible_alias = "r")]
    Restructure,

    /// Run inject, translate and restructure in that order
    #[command(visible_alias = "a")]
    All,

    /// Validate dictionaries and rule sets without touching any file
    #[command(visible_alias = "c")]
    Check,
}

/// Output format of the batch report.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Colored per-document lines and a summary
    #[default]
    Human,
    /// One JSON document with every result
    Json,
}

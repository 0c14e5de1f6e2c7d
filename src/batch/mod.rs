//! Batch runner.
//!
//! Runs one [`Pass`] over an ordered list of page identifiers. Every
//! document ends in exactly one [`Outcome`]; per-document failures are
//! recorded and the batch always continues.
//!
//! ```text
//! for each identifier:
//!   missing? ──► Missing
//!   read     ──► ReadFailed
//!   guard + transform
//!   changed? ──► write (temp file + rename) ──► Applied | WriteFailed
//!   else     ──► AlreadyPresent | NoPatternMatch
//! ```

mod discover;
mod write;

pub use discover::discover;
pub use write::write_atomic;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::debug;
use crate::logger::ProgressLine;
use crate::transform::{Outcome, Pass, PassKind, Rewrite};

/// A page loaded for one pass.
///
/// Read once, mutated in memory, written at most once.
#[derive(Debug)]
pub struct Document {
    pub id: String,
    pub path: PathBuf,
    text: String,
    mutated: bool,
}

impl Document {
    pub fn load(id: impl Into<String>, path: PathBuf) -> io::Result<Self> {
        let text = fs::read_to_string(&path)?;
        Ok(Self {
            id: id.into(),
            path,
            text,
            mutated: false,
        })
    }

    /// Run `pass` over the in-memory text.
    pub fn apply(&mut self, pass: &Pass) -> Rewrite {
        let mut rewrite = pass.apply(&self.text);
        if let Some(text) = rewrite.text.take() {
            self.text = text;
            self.mutated = true;
        }
        rewrite
    }

    /// Persist the text if it changed. No-op otherwise.
    pub fn save(&self) -> io::Result<()> {
        if self.mutated {
            write_atomic(&self.path, &self.text)?;
        }
        Ok(())
    }
}

/// Final state of one document after one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformResult {
    pub document: String,
    pub applied: bool,
    pub reason: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl TransformResult {
    fn new(document: &str, reason: Outcome, detail: Option<String>) -> Self {
        Self {
            document: document.to_string(),
            applied: reason == Outcome::Applied,
            reason,
            detail,
        }
    }
}

/// Batch options shared by every pass of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Compute rewrites but never write.
    pub dry_run: bool,
    /// Draw a progress line on the terminal.
    pub progress: bool,
}

/// Aggregated results of one pass.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub pass: PassKind,
    pub dry_run: bool,
    pub results: Vec<TransformResult>,
}

/// Per-outcome totals, as serialized in the JSON report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub documents: usize,
    pub applied: usize,
    pub already_present: usize,
    pub no_pattern_match: usize,
    pub missing: usize,
    pub read_failed: usize,
    pub write_failed: usize,
}

impl BatchReport {
    pub fn applied_count(&self) -> usize {
        self.count(Outcome::Applied)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.results.iter().filter(|r| r.reason == outcome).count()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.reason.is_failure())
    }

    pub fn totals(&self) -> Totals {
        Totals {
            documents: self.results.len(),
            applied: self.applied_count(),
            already_present: self.count(Outcome::AlreadyPresent),
            no_pattern_match: self.count(Outcome::NoPatternMatch),
            missing: self.count(Outcome::Missing),
            read_failed: self.count(Outcome::ReadFailed),
            write_failed: self.count(Outcome::WriteFailed),
        }
    }
}

/// Run `pass` over `documents` (identifiers relative to `root`), in order.
pub fn run_batch(root: &Path, documents: &[String], pass: &Pass, options: BatchOptions) -> BatchReport {
    let progress = options
        .progress
        .then(|| ProgressLine::new(pass.kind().as_str(), &[("documents", documents.len())]));

    let mut results = Vec::with_capacity(documents.len());
    for id in documents {
        let result = process(root, id, pass, options.dry_run);
        debug!(pass.kind().as_str(); "{}: {}", id, result.reason.label());
        results.push(result);
        if let Some(progress) = &progress {
            progress.inc("documents");
        }
    }

    if let Some(progress) = progress {
        progress.finish();
    }

    BatchReport {
        pass: pass.kind(),
        dry_run: options.dry_run,
        results,
    }
}

fn process(root: &Path, id: &str, pass: &Pass, dry_run: bool) -> TransformResult {
    let path = root.join(id);
    if !path.is_file() {
        return TransformResult::new(id, Outcome::Missing, None);
    }

    let mut doc = match Document::load(id, path) {
        Ok(doc) => doc,
        Err(err) => return TransformResult::new(id, Outcome::ReadFailed, Some(err.to_string())),
    };

    let rewrite = doc.apply(pass);
    if !dry_run && let Err(err) = doc.save() {
        debug!("write"; "{}: {}", doc.path.display(), err);
        return TransformResult::new(&doc.id, Outcome::WriteFailed, Some(err.to_string()));
    }
    TransformResult::new(&doc.id, rewrite.outcome, rewrite.detail)
}

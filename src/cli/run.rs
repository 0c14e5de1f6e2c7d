//! Pass commands: `inject`, `translate`, `restructure`, `all`.

use anyhow::{Context, Result, bail};

use super::args::{Cli, Commands, ReportFormat};
use super::report;
use crate::batch::{BatchOptions, BatchReport, discover, run_batch};
use crate::config::RelabelConfig;
use crate::dict::Dictionary;
use crate::transform::{Pass, inject_pass, restructure_pass};
use crate::translate::TranslationTable;
use crate::utils::plural_count;
use crate::{debug, log};

/// A compiled pass and the documents it runs over.
struct Job {
    pass: Pass,
    documents: Vec<String>,
}

/// Run the pass command(s) selected on the command line.
///
/// Every pass is compiled before any document is touched. Returns whether
/// any document failed to read or write.
pub fn run_passes(cli: &Cli, config: &RelabelConfig) -> Result<bool> {
    let jobs = match &cli.command {
        Commands::Inject => vec![inject_job(config)?],
        Commands::Translate { complete } => vec![translate_job(config, *complete)?],
        Commands::Restructure => vec![restructure_job(config)?],
        Commands::All => vec![
            inject_job(config)?,
            translate_job(config, false)?,
            restructure_job(config)?,
        ],
        Commands::Check => bail!("`check` does not run passes"),
    };

    if !config.root.is_dir() {
        bail!("site root `{}` is not a directory", config.root.display());
    }
    debug!("root"; "{}", config.root.display());

    let options = BatchOptions {
        dry_run: cli.dry_run,
        progress: cli.format == ReportFormat::Human,
    };

    let mut reports: Vec<BatchReport> = Vec::with_capacity(jobs.len());
    for job in &jobs {
        let report = run_batch(&config.root, &job.documents, &job.pass, options);
        if cli.format == ReportFormat::Human {
            report::print_human(&report);
        }
        reports.push(report);
    }

    if cli.format == ReportFormat::Json {
        report::print_json(&reports).context("failed to serialize report")?;
    }

    let failed = reports.iter().any(BatchReport::has_failures);
    if failed {
        log!("error"; "some documents could not be read or written");
    }
    Ok(failed)
}

fn inject_job(config: &RelabelConfig) -> Result<Job> {
    let pass = inject_pass(&config.inject.script, &config.inject.anchors)
        .context("invalid injection rules")?;
    Ok(Job {
        pass,
        documents: config.inject.documents.clone(),
    })
}

fn restructure_job(config: &RelabelConfig) -> Result<Job> {
    let pass = restructure_pass().context("invalid restructuring rules")?;
    Ok(Job {
        pass,
        documents: config.restructure.documents.clone(),
    })
}

fn translate_job(config: &RelabelConfig, complete: bool) -> Result<Job> {
    let settings = &config.translate;
    let dictionary = if complete {
        settings.complete_dictionary
    } else {
        settings.dictionary
    };
    let table = build_table(config, dictionary)?;

    let documents = if complete {
        let found = discover(&config.root, settings.extension(), settings.recursive);
        log!("translate"; "found {} under {}",
            plural_count(found.len(), "page"), config.root.display());
        found
    } else {
        settings.documents.clone()
    };

    Ok(Job {
        pass: Pass::translate(table),
        documents,
    })
}

/// Compile a built-in dictionary merged with `translate.extra`.
pub(super) fn build_table(config: &RelabelConfig, dictionary: Dictionary) -> Result<TranslationTable> {
    let table = TranslationTable::new(config.translate.phrases(dictionary), config.translate.overlap)
        .with_context(|| format!("invalid `{}` translation table", dictionary.name()))?;

    debug!("translate"; "{} dictionary: {}, {}",
        dictionary.name(),
        plural_count(table.len(), "phrase"),
        plural_count(table.issues().len(), "overlap"));
    if !table.issues().is_empty() {
        log!("warning"; "{} dictionary: {}, longest phrase wins (see `relabel check`)",
            dictionary.name(),
            plural_count(table.issues().len(), "overlapping phrase"));
    }
    for issue in table.issues() {
        debug!("translate"; "{}", issue);
    }
    Ok(table)
}

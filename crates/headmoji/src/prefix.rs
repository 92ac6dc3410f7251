use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use headmoji_core::{Direction, HeadingPrefixer, TransformOutput, TransformStats};
use serde::Serialize;
use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

/// Options shared by `apply` and `remove`
#[derive(Debug, clap::Args, Clone, Default)]
#[command(after_help = "EXAMPLES:
  # Print a prefixed copy of a note:
  headmoji apply notes.md

  # Prefix every note in place:
  headmoji apply --write docs/*.md

  # Strip prefixes from stdin:
  cat notes.md | headmoji remove

  # Fail when any file is missing prefixes (useful in CI):
  headmoji apply --check docs/*.md

NOTES:
  - Lines inside code fences, front matter and multi-line comments are never treated as headings
  - Headings deeper than six '#' are left alone
  - Symbols come from --config, $HEADMOJI_CONFIG or <config dir>/headmoji/config.toml")]
pub struct PrefixOptions {
    /// Markdown files to process (reads stdin when omitted)
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place instead of printing the result
    #[arg(short, long)]
    pub write: bool,

    /// Write nothing; exit with an error if any document would change
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Output per-document reports as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct DocumentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub direction: Direction,
    pub changed: bool,
    pub written: bool,
    pub stats: TransformStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

pub fn run(direction: Direction, options: PrefixOptions, global: crate::Global) -> Result<()> {
    validate_options(&options)?;

    let prefixer = crate::config::build_prefixer(&global)?;

    let reports = if options.paths.is_empty() {
        let mut document = String::new();
        std::io::stdin()
            .read_to_string(&mut document)
            .context("Failed to read document from stdin")?;

        let output = prefixer.transform(&document, direction);
        vec![build_report(None, output, false, &options)]
    } else {
        options
            .paths
            .iter()
            .map(|path| process_file(&prefixer, direction, path, &options))
            .collect::<Result<Vec<_>>>()?
    };

    if options.json {
        output_json(&reports)?;
    } else {
        output_documents(&reports)?;
    }

    if global.verbose || std::io::stderr().is_terminal() {
        for report in &reports {
            eprintln!("{}", format_notice(report, options.check));
        }
    }

    if options.check {
        check_pending(&reports)?;
    }

    Ok(())
}

/// Fails with the number of documents the transform would rewrite.
fn check_pending(reports: &[DocumentReport]) -> std::result::Result<(), Error> {
    let pending = reports.iter().filter(|report| report.changed).count();
    if pending > 0 {
        return Err(Error::WouldChange(pending));
    }

    Ok(())
}

fn validate_options(options: &PrefixOptions) -> std::result::Result<(), Error> {
    if options.write && options.paths.is_empty() {
        return Err(Error::WriteStdin);
    }

    let count = options.paths.len();
    if count > 1 && !(options.write || options.check || options.json) {
        return Err(Error::MultipleTargets(count));
    }

    Ok(())
}

/// Transform one file, writing it back when asked and when the content changed
pub fn process_file(
    prefixer: &HeadingPrefixer,
    direction: Direction,
    path: &Path,
    options: &PrefixOptions,
) -> Result<DocumentReport> {
    log::debug!("Reading {}", path.display());

    let document = fs::read_to_string(path)
        .with_context(|| f!("Failed to read {}", path.display()))?;

    let output = prefixer.transform(&document, direction);
    let written = options.write && output.changed;

    if written {
        fs::write(path, &output.content)
            .with_context(|| f!("Failed to write {}", path.display()))?;
        log::info!("Updated {}", path.display());
    }

    Ok(build_report(
        Some(path.to_path_buf()),
        output,
        written,
        options,
    ))
}

fn build_report(
    path: Option<PathBuf>,
    output: TransformOutput,
    written: bool,
    options: &PrefixOptions,
) -> DocumentReport {
    let keep_content = !options.write && !options.check;

    DocumentReport {
        path,
        direction: output.direction,
        changed: output.changed,
        written,
        stats: output.stats,
        content: keep_content.then_some(output.content),
    }
}

fn output_json(reports: &[DocumentReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{}", json);
    Ok(())
}

/// Documents go to stdout byte for byte, bypassing ANSI stripping
fn output_documents(reports: &[DocumentReport]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    for content in reports.iter().filter_map(|report| report.content.as_deref()) {
        stdout.write_all(content.as_bytes())?;
    }

    stdout.flush()?;
    Ok(())
}

/// Confirmation line shown on stderr after a transform
fn format_notice(report: &DocumentReport, check: bool) -> String {
    let target = report
        .path
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |path| path.display().to_string());
    let stats = &report.stats;

    if check {
        return if report.changed {
            f!(
                "{} {} would change ({} of {} headings)",
                "✗".red().bold(),
                target.bright_white(),
                stats.modified(),
                stats.headings
            )
        } else {
            f!("{} {} is up to date", "✓".green().bold(), target.bright_white())
        };
    }

    let summary = match report.direction {
        Direction::Apply => f!(
            "Added prefixes to {} of {} headings",
            stats.modified(),
            stats.headings
        ),
        Direction::Remove => f!(
            "Removed prefixes from {} of {} headings",
            stats.removed,
            stats.headings
        ),
    };

    let suffix = if report.written { " (written)" } else { "" };

    f!(
        "{} {} in {}{}",
        "✓".green().bold(),
        summary,
        target.bright_white(),
        suffix
    )
}

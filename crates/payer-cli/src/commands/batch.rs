//! Batch command - extract payer names from many OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use payer_core::PayerNameExtractor;

use super::{build_extractor, load_config, read_text, ExtractionReport};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "receipts/*.txt")
    #[arg(required = true)]
    input: String,

    /// Directory for one JSON result per input file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write a CSV summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<ExtractionReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    file: String,
    name: &'a str,
    stage: String,
    distance: Option<usize>,
    error: &'a str,
    processed_at: String,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let extractor = Arc::new(build_extractor(&config)?);

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Workers run on the blocking pool; `buffered` keeps input order
    let mut pending = stream::iter(files)
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            tokio::task::spawn_blocking(move || process_single_file(path, &extractor))
        })
        .buffered(args.jobs.max(1));

    let mut results = Vec::new();

    while let Some(joined) = pending.next().await {
        let result = joined?;

        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                pb.abandon();
                anyhow::bail!("Processing failed: {}", error_msg);
            }
        }

        results.push(result);
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(ref output_dir) = args.output_dir {
        for result in &results {
            if let Some(report) = &result.report {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("receipt");
                let output_path = output_dir.join(format!("{}.json", output_name));

                fs::write(&output_path, serde_json::to_string(report)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if let Some(ref summary_path) = args.summary {
        write_summary(summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let found = results
        .iter()
        .filter(|r| r.report.as_ref().is_some_and(ExtractionReport::is_found))
        .count();
    let failed = results.iter().filter(|r| r.error.is_some()).count();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!("  Names found: {}", style(found).green());
    eprintln!("  No name:     {}", style(results.len() - found - failed).yellow());
    if failed > 0 {
        eprintln!("  Failed:      {}", style(failed).red());
    }

    Ok(())
}

fn process_single_file(path: PathBuf, extractor: &PayerNameExtractor) -> ProcessResult {
    let file_start = Instant::now();

    let outcome = read_text(&path)
        .map(|text| ExtractionReport::new(extractor.explain(Some(&text)), true));

    let processing_time_ms = file_start.elapsed().as_millis() as u64;
    debug!("Processed {} in {}ms", path.display(), processing_time_ms);

    match outcome {
        Ok(report) => ProcessResult {
            path,
            report: Some(report),
            error: None,
            processing_time_ms,
        },
        Err(e) => ProcessResult {
            path,
            report: None,
            error: Some(e.to_string()),
            processing_time_ms,
        },
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    let processed_at = Utc::now().to_rfc3339();

    for result in results {
        let report = result.report.as_ref();
        wtr.serialize(SummaryRow {
            file: result.path.display().to_string(),
            name: report.map(|r| r.name.as_str()).unwrap_or(""),
            stage: report
                .and_then(|r| r.stage)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            distance: report.and_then(|r| r.distance),
            error: result.error.as_deref().unwrap_or(""),
            processed_at: processed_at.clone(),
        })?;
        debug!(
            "{}: {}ms",
            result.path.display(),
            result.processing_time_ms
        );
    }

    wtr.flush()?;
    Ok(())
}

//! Batch command - analyze many résumés and summarize the scores.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use ats_core::{AnalysisResult, Document, ResumeAnalyzer};

use super::load_config;
use super::report::{csv_record, render, OutputFormat, CSV_HEADER};

/// Extensions picked up from the glob.
const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt", "md"];

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of résumé files
    #[arg(required = true)]
    input: String,

    /// Directory for per-file reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Format of per-file reports
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write summary.csv with one row per file
    #[arg(long)]
    summary: bool,

    /// Keep going when a file cannot be analyzed
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome for a single file.
struct FileOutcome {
    path: PathBuf,
    result: Result<AnalysisResult, String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let analyzer = ResumeAnalyzer::new(load_config(config_path)?)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| has_resume_extension(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} résumés to analyze",
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

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let file_start = Instant::now();
        let result = Document::from_path(&path)
            .map_err(|e| e.to_string())
            .and_then(|doc| analyzer.analyze_document(&doc, None).map_err(|e| e.to_string()));
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        if let Err(message) = &result {
            if args.continue_on_error {
                warn!("Failed to analyze {}: {}", path.display(), message);
            } else {
                error!("Failed to analyze {}: {}", path.display(), message);
                pb.abandon();
                anyhow::bail!("Analysis of {} failed: {}", path.display(), message);
            }
        }

        outcomes.push(FileOutcome {
            path,
            result,
            processing_time_ms,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    if let Some(output_dir) = &args.output_dir {
        for outcome in &outcomes {
            if let Ok(result) = &outcome.result {
                let name = file_name(&outcome.path);
                let stem = outcome
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("resume");
                let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));

                fs::write(&output_path, render(result, args.format, name)?)?;
                debug!("Wrote report to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<&FileOutcome> = outcomes.iter().filter(|o| o.result.is_err()).collect();
    let succeeded = outcomes.len() - failed.len();

    println!();
    println!(
        "{} Analyzed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(succeeded).green(),
        style(failed.len()).red()
    );

    if let Some(average) = average_score(&outcomes) {
        println!("   average ATS score: {:.1}", average);
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            if let Err(message) = &outcome.result {
                println!("  - {}: {}", outcome.path.display(), message);
            }
        }
    }

    Ok(())
}

fn has_resume_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| RESUME_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|s| s.to_str()).unwrap_or("")
}

fn average_score(outcomes: &[FileOutcome]) -> Option<f64> {
    let scores: Vec<u32> = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .map(|r| r.overall_score)
        .collect();
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<u32>() as f64 / scores.len() as f64)
}

fn write_summary(path: &Path, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = CSV_HEADER.to_vec();
    header.extend(["status", "processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for outcome in outcomes {
        let name = file_name(&outcome.path);
        let mut record = match &outcome.result {
            Ok(result) => csv_record(name, result),
            Err(_) => {
                let mut empty = vec![String::new(); CSV_HEADER.len()];
                empty[0] = name.to_string();
                empty
            }
        };
        let (status, message) = match &outcome.result {
            Ok(_) => ("success", ""),
            Err(e) => ("error", e.as_str()),
        };
        record.push(status.to_string());
        record.push(outcome.processing_time_ms.to_string());
        record.push(message.to_string());
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

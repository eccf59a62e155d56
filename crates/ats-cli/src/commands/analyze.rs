//! Analyze command - score a single résumé file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use ats_core::{Document, JobSearchRequest, ResumeAnalyzer};

use super::load_config;
use super::report::{render, OutputFormat};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Résumé file (PDF, DOCX or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Job description text to compare against
    #[arg(long, conflicts_with = "job_description_file")]
    job_description: Option<String>,

    /// File containing the job description
    #[arg(long)]
    job_description_file: Option<PathBuf>,

    /// Seed for reproducible job-match percentages
    #[arg(long)]
    seed: Option<u64>,

    /// Print the job-search workflow request for this user instead of the report
    #[arg(long, value_name = "USER_ID")]
    job_search_request: Option<String>,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.seed.is_some() {
        config.job_matches.seed = args.seed;
    }
    let analyzer = ResumeAnalyzer::new(config)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let job_description = match (&args.job_description, &args.job_description_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) => None,
    };

    info!("Analyzing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Reading document...");

    let document = Document::from_path(&args.input)?;

    pb.set_message("Scoring résumé...");
    let result = analyzer.analyze_document(&document, job_description.as_deref());
    pb.finish_and_clear();
    let result = result?;

    let output = match &args.job_search_request {
        Some(user_id) => {
            serde_json::to_string_pretty(&JobSearchRequest::from_analysis(user_id.as_str(), &result))?
        }
        None => render(&result, args.format, &document.file_name)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

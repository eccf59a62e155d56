//! Rendering analysis results as JSON, CSV or a plain-text report.

use std::fmt::Write as _;

use ats_core::AnalysisResult;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per résumé)
    Csv,
    /// Plain text report
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Columns shared by single-file CSV output and the batch summary.
pub const CSV_HEADER: [&str; 11] = [
    "file",
    "overall_score",
    "industry",
    "formatting",
    "keywords",
    "structure",
    "readability",
    "keywords_found",
    "keyword_density",
    "word_count",
    "improvements",
];

pub fn csv_record(file: &str, result: &AnalysisResult) -> Vec<String> {
    let s = &result.sections;
    let improvements: Vec<&str> = result.improvements.iter().map(|i| i.title.as_str()).collect();
    vec![
        file.to_string(),
        result.overall_score.to_string(),
        result.industry.clone(),
        format!("{:.1}", s.formatting.score),
        format!("{:.1}", s.keywords.score),
        format!("{:.1}", s.structure.score),
        format!("{:.1}", s.readability.score),
        s.keywords.found.len().to_string(),
        format!("{:.2}", s.keywords.density),
        result.word_count.to_string(),
        improvements.join("; "),
    ]
}

pub fn render(result: &AnalysisResult, format: OutputFormat, file: &str) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(CSV_HEADER)?;
            wtr.write_record(csv_record(file, result))?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => Ok(render_text(result, file)),
    }
}

fn render_text(result: &AnalysisResult, file: &str) -> String {
    let s = &result.sections;
    let mut out = String::new();

    let _ = writeln!(out, "Résumé: {}", file);
    let _ = writeln!(out, "ATS score: {}/100 ({})", result.overall_score, result.industry);
    let _ = writeln!(out, "Words: {}", result.word_count);
    out.push('\n');

    let _ = writeln!(out, "  Formatting   {:>5.1}", s.formatting.score);
    let _ = writeln!(
        out,
        "  Keywords     {:>5.1}  ({} found, density {:.2}%)",
        s.keywords.score,
        s.keywords.found.len(),
        s.keywords.density
    );
    let _ = writeln!(
        out,
        "  Structure    {:>5.1}  ({})",
        s.structure.score,
        s.structure.sections.join(", ")
    );
    let _ = writeln!(out, "  Readability  {:>5.1}", s.readability.score);

    if !s.keywords.missing.is_empty() {
        let _ = writeln!(
            out,
            "\nMissing {} keywords ({} total): {}",
            result.industry,
            s.keywords.missing_count,
            s.keywords.missing.join(", ")
        );
    }

    if !result.improvements.is_empty() {
        out.push_str("\nImprovements:\n");
        for imp in &result.improvements {
            let _ = writeln!(out, "  [{}] {} ({})", imp.severity, imp.title, imp.impact);
            let _ = writeln!(out, "      {}", imp.description);
        }
    }

    if let Some(alignment) = &result.job_alignment {
        let _ = writeln!(
            out,
            "\nJob description coverage: {:.2}% ({} of {} keywords)",
            alignment.coverage,
            alignment.matched.len(),
            alignment.requested.len()
        );
        if !alignment.missing.is_empty() {
            let _ = writeln!(out, "  Not in résumé: {}", alignment.missing.join(", "));
        }
    }

    out.push_str("\nJob matches:\n");
    for job in &result.job_matches {
        let _ = writeln!(
            out,
            "  {:>3}%  {} at {} ({})",
            job.match_percent, job.title, job.company, job.location
        );
    }

    out
}

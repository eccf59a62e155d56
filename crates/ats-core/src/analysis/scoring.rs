//! Multi-factor ATS scoring and improvement recommendations.

use tracing::debug;

use super::patterns::{ACHIEVEMENT_MARKERS, EXCESSIVE_SPACING, FORMATTING_RECOMMENDATIONS};
use super::sections::DetectedStructure;
use super::IndustryClassifier;
use crate::models::analysis::{
    FormattingReport, Improvement, KeywordOccurrenceIndex, KeywordReport, ReadabilityReport,
    SectionScores, Severity, StructureReport,
};
use crate::models::catalog::Industry;
use crate::models::config::ScoringConfig;

/// Below this many found keywords the keyword improvement fires.
const MIN_KEYWORDS: usize = 10;
/// Keyword count the "Insufficient Keywords" impact is measured against.
const KEYWORD_IMPACT_TARGET: f64 = 15.0;
/// Structure score below which missing sections are reported.
const STRUCTURE_TARGET: f64 = 80.0;
/// Keywords per 100 words below which density is reported.
const MIN_DENSITY: f64 = 1.5;

const SPACING_PENALTY: f64 = 10.0;
const SHORT_TEXT_PENALTY: f64 = 15.0;
const LONG_RESUME_PENALTY: f64 = 15.0;
const BRIEF_RESUME_PENALTY: f64 = 20.0;
const READABILITY_FLOOR: f64 = 60.0;

/// Everything the scorer needs about one résumé.
#[derive(Debug, Clone)]
pub struct ScoringInput<'a> {
    pub text: &'a str,
    pub word_count: usize,
    pub industry: &'a Industry,
    pub occurrences: KeywordOccurrenceIndex,
    pub structure: DetectedStructure,
}

/// Scorer output.
#[derive(Debug, Clone)]
pub struct Scorecard {
    pub overall_score: u32,
    pub sections: SectionScores,
    pub improvements: Vec<Improvement>,
}

/// Combines the four sub-scores into an overall score.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, input: ScoringInput<'_>) -> Scorecard {
        let found: Vec<String> = input.occurrences.keywords().map(str::to_string).collect();
        let missing = IndustryClassifier::missing_keywords(input.industry, &input.occurrences);

        let keyword_score = self.keyword_score(found.len(), input.industry.keywords.len());
        let structure_score =
            structure_score(input.structure.sections.len(), input.structure.critical_count);
        let formatting = self.formatting(input.text);
        let readability = self.readability(input.word_count);
        let density = keyword_density(found.len(), input.word_count);

        let overall_score = self.overall(
            keyword_score,
            structure_score,
            formatting.score,
            readability.score,
        );
        debug!(
            "Scores: keywords={:.1} structure={:.1} formatting={:.1} readability={:.1} overall={}",
            keyword_score, structure_score, formatting.score, readability.score, overall_score
        );

        let mut improvements = Vec::new();

        if found.len() < MIN_KEYWORDS {
            let examples: Vec<&str> = missing.iter().take(8).map(String::as_str).collect();
            improvements.push(Improvement::new(
                Severity::Critical,
                "Insufficient Keywords",
                format!(
                    "Only {} relevant keywords found. Add more {} keywords like: {}",
                    found.len(),
                    input.industry.name,
                    examples.join(", ")
                ),
                impact_points((KEYWORD_IMPACT_TARGET - found.len() as f64) * 2.0),
            ));
        }

        if structure_score < STRUCTURE_TARGET {
            let sections: Vec<&str> = input
                .structure
                .missing_critical
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            improvements.push(Improvement::new(
                Severity::Warning,
                "Missing Critical Sections",
                format!("Add these important sections: {}", sections.join(", ")),
                impact_points((STRUCTURE_TARGET - structure_score) * 0.25),
            ));
        }

        if density < MIN_DENSITY {
            improvements.push(Improvement::new(
                Severity::Suggestion,
                "Low Keyword Density",
                "Naturally incorporate more relevant keywords throughout your resume content."
                    .to_string(),
                5,
            ));
        }

        if !formatting.issues.is_empty() {
            improvements.push(Improvement::new(
                Severity::Warning,
                "Formatting Issues Detected",
                formatting.issues.join("; "),
                8,
            ));
        }

        if !mentions_achievements(input.text) {
            improvements.push(Improvement::new(
                Severity::Suggestion,
                "Add Quantified Achievements",
                "Include specific metrics and results (e.g., \"Increased efficiency by 25%\", \"Managed team of 8\")"
                    .to_string(),
                7,
            ));
        }

        let missing_count = missing.len();
        let missing = missing
            .into_iter()
            .take(self.config.missing_keywords_exposed)
            .collect();

        Scorecard {
            overall_score,
            sections: SectionScores {
                formatting,
                keywords: KeywordReport {
                    score: keyword_score,
                    found,
                    missing,
                    missing_count,
                    density,
                    locations: input.occurrences,
                },
                structure: StructureReport {
                    score: structure_score,
                    sections: input.structure.sections,
                    missing_critical: input.structure.missing_critical,
                },
                readability,
            },
            improvements,
        }
    }

    /// Found keywords against a target of `max(floor, industry size × ratio)`.
    pub fn keyword_score(&self, found: usize, industry_size: usize) -> f64 {
        let target = self
            .config
            .keyword_target_floor
            .max(industry_size as f64 * self.config.keyword_target_ratio);
        if target <= 0.0 {
            return 100.0;
        }
        (found as f64 / target * 100.0).min(100.0)
    }

    pub fn formatting(&self, text: &str) -> FormattingReport {
        let mut score = self.config.base_formatting_score;
        let mut issues = Vec::new();

        if text.contains('\t') || EXCESSIVE_SPACING.is_match(text) {
            score -= SPACING_PENALTY;
            issues.push("Excessive spacing or tabs detected".to_string());
        }
        if text.chars().count() < self.config.short_text_chars {
            score -= SHORT_TEXT_PENALTY;
            issues.push("Resume appears too short".to_string());
        }

        FormattingReport {
            score: score.clamp(0.0, 100.0),
            issues,
            recommendations: FORMATTING_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    pub fn readability(&self, word_count: usize) -> ReadabilityReport {
        let mut score = 100.0;
        let mut issues = Vec::new();

        if word_count > self.config.long_resume_words {
            score -= LONG_RESUME_PENALTY;
            issues.push("Resume is quite lengthy - consider condensing".to_string());
        }
        if word_count < self.config.brief_resume_words {
            score -= BRIEF_RESUME_PENALTY;
            issues.push("Resume is too brief - add more detail".to_string());
        }

        ReadabilityReport {
            score: f64::clamp(score, READABILITY_FLOOR, 100.0),
            issues,
        }
    }

    /// Weighted, rounded sum of the four sub-scores.
    pub fn overall(&self, keywords: f64, structure: f64, formatting: f64, readability: f64) -> u32 {
        let c = &self.config;
        let weighted = keywords * c.keyword_weight
            + structure * c.structure_weight
            + formatting * c.formatting_weight
            + readability * c.readability_weight;
        weighted.round().clamp(0.0, 100.0) as u32
    }
}

/// Detected sections against the critical list, capped at 100.
pub fn structure_score(detected: usize, critical: usize) -> f64 {
    if critical == 0 {
        return 100.0;
    }
    (detected as f64 / critical as f64 * 100.0).min(100.0)
}

/// Found keywords per 100 words, rounded to two decimals.
pub fn keyword_density(found: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    round2(found as f64 / word_count as f64 * 100.0)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn impact_points(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

fn mentions_achievements(text: &str) -> bool {
    let text = text.to_lowercase();
    ACHIEVEMENT_MARKERS.iter().any(|m| text.contains(m))
}

//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};

use super::catalog::{KeywordCatalog, SectionCatalog};

/// Main configuration for the ats pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsConfig {
    /// Document extraction configuration.
    pub extraction: ExtractionConfig,

    /// Scoring weights and thresholds.
    pub scoring: ScoringConfig,

    /// Job match synthesis configuration.
    pub job_matches: JobMatchConfig,

    /// Keyword catalog used for indexing and industry classification.
    pub keywords: KeywordCatalog,

    /// Section catalog used for structure detection.
    pub sections: SectionCatalog,
}

/// Document extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum trimmed text length (characters) required for analysis.
    pub min_text_length: usize,

    /// Reject documents larger than this before decoding.
    pub max_document_bytes: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
            max_document_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the keyword sub-score in the overall score.
    pub keyword_weight: f64,

    /// Weight of the structure sub-score.
    pub structure_weight: f64,

    /// Weight of the formatting sub-score.
    pub formatting_weight: f64,

    /// Weight of the readability sub-score.
    pub readability_weight: f64,

    /// Lower bound on the number of keywords needed for a full keyword score.
    pub keyword_target_floor: f64,

    /// Share of the industry catalog needed for a full keyword score.
    pub keyword_target_ratio: f64,

    /// Formatting score before penalties.
    pub base_formatting_score: f64,

    /// Texts shorter than this (characters) get the "too short" penalty.
    pub short_text_chars: usize,

    /// Résumés above this word count are flagged as lengthy.
    pub long_resume_words: usize,

    /// Résumés below this word count are flagged as brief.
    pub brief_resume_words: usize,

    /// How many missing keywords the result exposes.
    pub missing_keywords_exposed: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.35,
            structure_weight: 0.25,
            formatting_weight: 0.25,
            readability_weight: 0.15,
            keyword_target_floor: 10.0,
            keyword_target_ratio: 0.3,
            base_formatting_score: 90.0,
            short_text_chars: 500,
            long_resume_words: 1000,
            brief_resume_words: 300,
            missing_keywords_exposed: 15,
        }
    }
}

/// Job match synthesis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMatchConfig {
    /// Fixed seed for the match-percentage jitter. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl AtsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

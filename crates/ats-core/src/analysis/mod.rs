//! Résumé analysis pipeline.
//!
//! Indexer → classifier → structure detector → scorer → job matches, driven
//! by [`ResumeAnalyzer`].

mod alignment;
mod analyzer;
mod industry;
mod job_match;
mod keywords;
pub mod patterns;
mod scoring;
mod sections;

pub use alignment::align;
pub use analyzer::ResumeAnalyzer;
pub use industry::IndustryClassifier;
pub use job_match::{JobMatchSynthesizer, JOB_MATCH_COUNT};
pub use keywords::KeywordIndexer;
pub use scoring::{keyword_density, structure_score, Scorecard, Scorer, ScoringInput};
pub use sections::{DetectedStructure, StructureDetector};

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

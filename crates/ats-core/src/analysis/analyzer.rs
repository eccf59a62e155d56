//! Analysis orchestrator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{
    align, word_count, IndustryClassifier, JobMatchSynthesizer, KeywordIndexer, Scorer,
    ScoringInput, StructureDetector,
};
use crate::document::{extract_text, Document};
use crate::error::{AtsError, ExtractionError, Result};
use crate::models::analysis::AnalysisResult;
use crate::models::config::AtsConfig;

/// Compiled analysis pipeline.
///
/// Construction compiles the configured catalogs once; the analyzer is then
/// immutable and can be shared across threads. Every call owns its inputs and
/// returns a fresh result.
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    config: AtsConfig,
    indexer: KeywordIndexer,
    classifier: IndustryClassifier,
    structure: StructureDetector,
    scorer: Scorer,
    job_matches: JobMatchSynthesizer,
}

impl ResumeAnalyzer {
    pub fn new(config: AtsConfig) -> Result<Self> {
        let indexer = KeywordIndexer::new(&config.keywords)?;
        let classifier = IndustryClassifier::new(&config.keywords)?;
        let structure = StructureDetector::new(&config.sections)?;
        let scorer = Scorer::new(config.scoring.clone());
        debug!(
            "Compiled {} keywords and {} section rules",
            indexer.len(),
            config.sections.rules.len()
        );

        Ok(Self {
            config,
            indexer,
            classifier,
            structure,
            scorer,
            job_matches: JobMatchSynthesizer::new(),
        })
    }

    pub fn config(&self) -> &AtsConfig {
        &self.config
    }

    /// Fix or clear the job-match seed. The compiled catalogs are kept.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config.job_matches.seed = seed;
    }

    /// Analyze extracted text.
    ///
    /// Job-match jitter comes from the configured seed, or from entropy when
    /// no seed is set.
    pub fn analyze(&self, text: &str, job_description: Option<&str>) -> AnalysisResult {
        let mut rng = match self.config.job_matches.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.analyze_with_rng(text, job_description, &mut rng)
    }

    /// Analyze extracted text with an explicit random source.
    pub fn analyze_with_rng<R: Rng>(
        &self,
        text: &str,
        job_description: Option<&str>,
        rng: &mut R,
    ) -> AnalysisResult {
        let words = word_count(text);
        let occurrences = self.indexer.index(text);
        let industry = self.classifier.classify(&occurrences);
        debug!(
            "Found {} keywords, industry: {}",
            occurrences.len(),
            industry.name
        );

        let structure = self.structure.detect(text);
        debug!(
            "Detected sections: {:?}, missing: {:?}",
            structure.sections, structure.missing_critical
        );

        let job_alignment =
            job_description.and_then(|jd| align(&self.indexer, jd, &occurrences));

        let card = self.scorer.score(ScoringInput {
            text,
            word_count: words,
            industry,
            occurrences,
            structure,
        });

        let job_matches = self.job_matches.synthesize(
            card.overall_score,
            industry,
            &card.sections.keywords.found,
            rng,
        );

        AnalysisResult {
            overall_score: card.overall_score,
            industry: industry.name.clone(),
            sections: card.sections,
            improvements: card.improvements,
            job_matches,
            job_alignment,
            extracted_text: text.to_string(),
            word_count: words,
        }
    }

    /// Reject text too short to analyze.
    pub fn ensure_sufficient_text(&self, text: &str) -> Result<()> {
        let length = text.trim().chars().count();
        let minimum = self.config.extraction.min_text_length;
        if length < minimum {
            return Err(AtsError::InsufficientText { length, minimum });
        }
        Ok(())
    }

    /// Validate extracted text, then analyze it.
    pub fn analyze_checked(&self, text: &str, job_description: Option<&str>) -> Result<AnalysisResult> {
        self.ensure_sufficient_text(text)?;
        Ok(self.analyze(text, job_description))
    }

    /// Extract, validate and analyze a document.
    pub fn analyze_document(
        &self,
        document: &Document,
        job_description: Option<&str>,
    ) -> Result<AnalysisResult> {
        let limit = self.config.extraction.max_document_bytes;
        if document.size() > limit {
            return Err(ExtractionError::DocumentTooLarge {
                size: document.size(),
                limit,
            }
            .into());
        }

        info!("Analyzing {} ({} bytes)", document.file_name, document.size());
        let text = extract_text(document)?;
        let result = self.analyze_checked(&text, job_description)?;

        info!(
            "Analyzed {}: score {}, {} words, {} improvements",
            document.file_name,
            result.overall_score,
            result.word_count,
            result.improvements.len()
        );
        Ok(result)
    }
}

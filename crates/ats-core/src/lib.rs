//! Core library for ATS-style résumé analysis.
//!
//! This crate provides:
//! - Text extraction from PDF, Word (OOXML) and plain-text documents
//! - Keyword indexing with per-line context and industry classification
//! - Résumé section detection and multi-factor ATS scoring
//! - Improvement recommendations and illustrative job matches
//! - An in-memory mock of the job-search workflow boundary

pub mod analysis;
pub mod document;
pub mod error;
pub mod models;
pub mod workflow;

pub use analysis::ResumeAnalyzer;
pub use document::{extract_text, Document, DocumentExtractor, DocumentFormat};
pub use error::{AtsError, ExtractionError, Result, WorkflowError};
pub use models::analysis::{
    AnalysisResult, Improvement, JobAlignment, JobMatch, KeywordLocation, KeywordOccurrenceIndex,
    SectionScores, Severity,
};
pub use models::catalog::{Industry, KeywordCatalog, SectionCatalog, SectionRule};
pub use models::config::AtsConfig;
pub use models::workflow::{
    JobSearchRequest, JobSearchResponse, ResumeRecord, SheetInfo, SheetStorageRequest, StoreHealth,
};
pub use workflow::InMemoryWorkflowStore;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

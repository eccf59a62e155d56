//! Analysis result models.
//!
//! Field names serialize in camelCase because the primary consumer is the
//! browser UI.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Complete output of one résumé analysis.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Weighted overall ATS score (0 - 100).
    pub overall_score: u32,

    /// Industry whose catalog best matched the résumé.
    pub industry: String,

    /// Sub-scores with supporting detail.
    pub sections: SectionScores,

    /// Improvement recommendations, in a fixed order.
    pub improvements: Vec<Improvement>,

    /// Synthesized job listings, most senior first.
    pub job_matches: Vec<JobMatch>,

    /// Keyword alignment with the job description, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_alignment: Option<JobAlignment>,

    /// The analyzed text.
    pub extracted_text: String,

    /// Number of whitespace-delimited tokens in the text.
    pub word_count: usize,
}

impl AnalysisResult {
    /// Titles of the synthesized job matches.
    pub fn suggested_roles(&self) -> Vec<String> {
        self.job_matches.iter().map(|j| j.title.clone()).collect()
    }

    /// Whether an improvement with the given title was produced.
    pub fn has_improvement(&self, title: &str) -> bool {
        self.improvements.iter().any(|i| i.title == title)
    }
}

/// The four scored dimensions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub formatting: FormattingReport,
    pub keywords: KeywordReport,
    pub structure: StructureReport,
    pub readability: ReadabilityReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingReport {
    pub score: f64,
    pub issues: Vec<String>,
    /// General ATS formatting advice, always present.
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub score: f64,
    /// Catalog keywords present in the text, in catalog order.
    pub found: Vec<String>,
    /// Leading part of the detected industry's missing keywords.
    pub missing: Vec<String>,
    /// Size of the full missing list before truncation.
    pub missing_count: usize,
    /// Found keywords per 100 words, two decimals.
    pub density: f64,
    pub locations: KeywordOccurrenceIndex,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub score: f64,
    /// Detected section names, in catalog order.
    pub sections: Vec<String>,
    pub missing_critical: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    pub score: f64,
    pub issues: Vec<String>,
}

/// Severity of an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        };
        f.write_str(s)
    }
}

/// A single improvement recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvement {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Human-readable estimate, e.g. "+8 ATS Score".
    pub impact: String,
    /// Estimated score gain behind `impact`.
    pub impact_points: u32,
}

impl Improvement {
    pub fn new(severity: Severity, title: &str, description: String, impact_points: u32) -> Self {
        Self {
            severity,
            title: title.to_string(),
            description,
            impact: format!("+{} ATS Score", impact_points),
            impact_points,
        }
    }
}

/// A synthesized job listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub title: String,
    /// Match percentage.
    #[serde(rename = "match")]
    pub match_percent: u32,
    pub company: String,
    pub location: String,
    /// Leading found keywords presented as the listing's requirements.
    pub requirements: Vec<String>,
}

/// Catalog keywords requested by a job description versus the résumé.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAlignment {
    /// Catalog keywords mentioned in the job description.
    pub requested: Vec<String>,
    /// Requested keywords also present in the résumé.
    pub matched: Vec<String>,
    /// Requested keywords absent from the résumé.
    pub missing: Vec<String>,
    /// matched / requested × 100, two decimals.
    pub coverage: f64,
}

/// One place a keyword occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordLocation {
    /// 1-based line number.
    pub line: usize,
    /// The line, trimmed.
    pub text: String,
}

impl fmt::Display for KeywordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.text)
    }
}

impl Serialize for KeywordLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Locations of a single keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordOccurrences {
    pub keyword: String,
    pub locations: Vec<KeywordLocation>,
}

/// Keyword → locations, ordered by catalog position.
///
/// Keywords without any occurrence are never stored. Serializes as a JSON
/// object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordOccurrenceIndex {
    entries: Vec<KeywordOccurrences>,
}

impl KeywordOccurrenceIndex {
    pub(crate) fn push(&mut self, keyword: &str, locations: Vec<KeywordLocation>) {
        if locations.is_empty() {
            return;
        }
        self.entries.push(KeywordOccurrences {
            keyword: keyword.to_string(),
            locations,
        });
    }

    /// Found keywords in discovery order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// Locations of a keyword (exact canonical spelling).
    pub fn get(&self, keyword: &str) -> Option<&[KeywordLocation]> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.locations.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordOccurrences> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for KeywordOccurrenceIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.keyword, &entry.locations)?;
        }
        map.end()
    }
}

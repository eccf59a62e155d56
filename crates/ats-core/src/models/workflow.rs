//! Request and response shapes of the job-search workflow boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;

/// Default name given to generated job sheets.
pub const DEFAULT_SHEET_NAME: &str = "LinkedIn Job Matches";

/// Payload that starts a job-search workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub user_id: String,
    pub resume_text: String,
    pub suggested_roles: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl JobSearchRequest {
    /// Build a request from an analysis: roles are the job-match titles and
    /// keywords are the found keywords.
    pub fn from_analysis(user_id: impl Into<String>, analysis: &AnalysisResult) -> Self {
        Self {
            user_id: user_id.into(),
            resume_text: analysis.extracted_text.clone(),
            suggested_roles: analysis.suggested_roles(),
            keywords: analysis.sections.keywords.found.clone(),
        }
    }
}

/// Reply to a workflow trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub success: bool,
    pub workflow_id: String,
    pub download_url: String,
    pub message: String,
}

/// Stored résumé, as returned to the workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub user_id: String,
    pub resume_text: String,
    pub suggested_roles: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload the workflow posts back once a sheet exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetStorageRequest {
    pub user_id: String,
    pub sheet_id: String,
    #[serde(default)]
    pub sheet_name: Option<String>,
    pub download_url: String,
}

/// Download information for a stored sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetInfo {
    pub sheet_id: String,
    pub sheet_name: String,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
}

/// Store occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHealth {
    pub resumes: usize,
    pub sheets: usize,
}

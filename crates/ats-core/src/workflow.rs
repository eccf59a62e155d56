//! In-memory stand-in for the job-search workflow backend.
//!
//! Stores résumé text per user and the job sheet the workflow would produce.
//! Nothing is persisted and no external service is contacted.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::WorkflowError;
use crate::models::workflow::{
    JobSearchRequest, JobSearchResponse, ResumeRecord, SheetInfo, SheetStorageRequest,
    StoreHealth, DEFAULT_SHEET_NAME,
};

/// Download link handed out for every simulated sheet.
pub const MOCK_DOWNLOAD_URL: &str =
    "https://docs.google.com/spreadsheets/d/1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms/export?format=xlsx";

type WorkflowResult<T> = std::result::Result<T, WorkflowError>;

/// Thread-safe résumé and sheet store keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryWorkflowStore {
    resumes: RwLock<HashMap<String, ResumeRecord>>,
    sheets: RwLock<HashMap<String, SheetInfo>>,
}

impl InMemoryWorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store (or replace) a user's résumé. Roles may be empty.
    pub fn store_resume(
        &self,
        user_id: &str,
        resume_text: &str,
        suggested_roles: Vec<String>,
    ) -> WorkflowResult<()> {
        require(&[("user_id", user_id), ("resume_text", resume_text)])?;
        self.put_resume(ResumeRecord {
            user_id: user_id.to_string(),
            resume_text: resume_text.to_string(),
            suggested_roles,
            keywords: Vec::new(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    pub fn get_resume(&self, user_id: &str) -> WorkflowResult<ResumeRecord> {
        require(&[("user_id", user_id)])?;
        self.resumes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound {
                what: "resume",
                user_id: user_id.to_string(),
            })
    }

    /// Record the résumé and simulate a finished workflow run.
    ///
    /// The placeholder sheet is stored right away, so a following
    /// [`download_sheet`](Self::download_sheet) succeeds.
    pub fn trigger_job_search(&self, request: JobSearchRequest) -> WorkflowResult<JobSearchResponse> {
        let mut missing = missing_fields(&[
            ("user_id", request.user_id.as_str()),
            ("resume_text", request.resume_text.as_str()),
        ]);
        if request.suggested_roles.is_empty() {
            missing.push("suggested_roles");
        }
        if !missing.is_empty() {
            return Err(WorkflowError::MissingFields(missing));
        }

        let now = Utc::now();
        let millis = now.timestamp_millis();
        let user_id = request.user_id.clone();

        self.put_resume(ResumeRecord {
            user_id: request.user_id,
            resume_text: request.resume_text,
            suggested_roles: request.suggested_roles,
            keywords: request.keywords,
            created_at: now,
        });
        self.sheets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                user_id.clone(),
                SheetInfo {
                    sheet_id: format!("sheet_{}", millis),
                    sheet_name: DEFAULT_SHEET_NAME.to_string(),
                    download_url: MOCK_DOWNLOAD_URL.to_string(),
                    created_at: now,
                },
            );

        let workflow_id = format!("workflow_{}", millis);
        info!("Triggered job search {} for {}", workflow_id, user_id);

        Ok(JobSearchResponse {
            success: true,
            workflow_id,
            download_url: MOCK_DOWNLOAD_URL.to_string(),
            message: "Job search workflow triggered successfully".to_string(),
        })
    }

    /// Workflow callback: remember where a user's sheet can be downloaded.
    pub fn store_sheet(&self, request: SheetStorageRequest) -> WorkflowResult<()> {
        require(&[
            ("user_id", request.user_id.as_str()),
            ("sheet_id", request.sheet_id.as_str()),
            ("download_url", request.download_url.as_str()),
        ])?;

        let sheet_name = request
            .sheet_name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());
        debug!("Storing sheet {} for {}", request.sheet_id, request.user_id);

        self.sheets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                request.user_id,
                SheetInfo {
                    sheet_id: request.sheet_id,
                    sheet_name,
                    download_url: request.download_url,
                    created_at: Utc::now(),
                },
            );
        Ok(())
    }

    pub fn download_sheet(&self, user_id: &str) -> WorkflowResult<SheetInfo> {
        require(&[("user_id", user_id)])?;
        self.sheets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound {
                what: "sheet",
                user_id: user_id.to_string(),
            })
    }

    pub fn health(&self) -> StoreHealth {
        StoreHealth {
            resumes: self.resumes.read().unwrap_or_else(PoisonError::into_inner).len(),
            sheets: self.sheets.read().unwrap_or_else(PoisonError::into_inner).len(),
        }
    }

    fn put_resume(&self, record: ResumeRecord) {
        self.resumes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.user_id.clone(), record);
    }
}

fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

fn require(fields: &[(&'static str, &str)]) -> WorkflowResult<()> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(WorkflowError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(user_id: &str) -> JobSearchRequest {
        JobSearchRequest {
            user_id: user_id.to_string(),
            resume_text: "Rust engineer".to_string(),
            suggested_roles: vec!["DevOps Engineer".to_string()],
            keywords: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_trigger_stores_resume_and_sheet() {
        let store = InMemoryWorkflowStore::new();
        let response = store.trigger_job_search(request("u1")).unwrap();

        assert!(response.success);
        assert!(response.workflow_id.starts_with("workflow_"));
        assert_eq!(response.download_url, MOCK_DOWNLOAD_URL);

        let resume = store.get_resume("u1").unwrap();
        assert_eq!(resume.keywords, vec!["Rust".to_string()]);

        let sheet = store.download_sheet("u1").unwrap();
        assert_eq!(sheet.sheet_name, DEFAULT_SHEET_NAME);
        assert!(sheet.sheet_id.starts_with("sheet_"));
        assert_eq!(store.health(), StoreHealth { resumes: 1, sheets: 1 });
    }

    #[test]
    fn test_trigger_reports_every_missing_field() {
        let store = InMemoryWorkflowStore::new();
        let err = store
            .trigger_job_search(JobSearchRequest {
                user_id: String::new(),
                resume_text: " ".to_string(),
                suggested_roles: vec![],
                keywords: vec![],
            })
            .unwrap_err();
        assert_eq!(
            err,
            WorkflowError::MissingFields(vec!["user_id", "resume_text", "suggested_roles"])
        );
        assert_eq!(store.health(), StoreHealth { resumes: 0, sheets: 0 });
    }

    #[test]
    fn test_store_sheet_defaults_name() {
        let store = InMemoryWorkflowStore::new();
        store
            .store_sheet(SheetStorageRequest {
                user_id: "u2".to_string(),
                sheet_id: "abc".to_string(),
                sheet_name: None,
                download_url: "https://example.com/abc.xlsx".to_string(),
            })
            .unwrap();

        let sheet = store.download_sheet("u2").unwrap();
        assert_eq!(sheet.sheet_name, DEFAULT_SHEET_NAME);
        assert_eq!(sheet.download_url, "https://example.com/abc.xlsx");
    }

    #[test]
    fn test_store_sheet_requires_url() {
        let store = InMemoryWorkflowStore::new();
        let err = store
            .store_sheet(SheetStorageRequest {
                user_id: "u3".to_string(),
                sheet_id: "abc".to_string(),
                sheet_name: Some("Mine".to_string()),
                download_url: String::new(),
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "download_url required");
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let store = InMemoryWorkflowStore::new();
        assert!(matches!(
            store.get_resume("ghost"),
            Err(WorkflowError::NotFound { what: "resume", .. })
        ));
        assert!(matches!(
            store.download_sheet("ghost"),
            Err(WorkflowError::NotFound { what: "sheet", .. })
        ));
    }

    #[test]
    fn test_store_resume_replaces_previous() {
        let store = InMemoryWorkflowStore::new();
        store.store_resume("u4", "first", vec![]).unwrap();
        store
            .store_resume("u4", "second", vec!["Finance Manager".to_string()])
            .unwrap();

        let record = store.get_resume("u4").unwrap();
        assert_eq!(record.resume_text, "second");
        assert_eq!(record.suggested_roles, vec!["Finance Manager".to_string()]);
        assert_eq!(store.health().resumes, 1);
    }
}

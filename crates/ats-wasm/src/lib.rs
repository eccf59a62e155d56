//! WASM bindings for ATS résumé analysis.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Results are returned as plain JS objects with the same camelCase shape as
//! the JSON reports.

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use ats_core::{
    AtsConfig, Document, InMemoryWorkflowStore, JobSearchRequest, ResumeAnalyzer,
    SheetStorageRequest,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_error(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Analyze résumé text with the default configuration.
#[wasm_bindgen]
pub fn analyze_text(text: &str, job_description: Option<String>) -> Result<JsValue, JsValue> {
    Analyzer::new(JsValue::UNDEFINED)?.analyze(text, job_description)
}

/// Extract and analyze an uploaded résumé with the default configuration.
#[wasm_bindgen]
pub fn analyze_document(
    bytes: &[u8],
    media_type: &str,
    file_name: &str,
    job_description: Option<String>,
) -> Result<JsValue, JsValue> {
    Analyzer::new(JsValue::UNDEFINED)?.analyze_document(bytes, media_type, file_name, job_description)
}

/// Résumé analyzer class for browser use.
#[wasm_bindgen]
pub struct Analyzer {
    inner: ResumeAnalyzer,
}

#[wasm_bindgen]
impl Analyzer {
    /// Create an analyzer. `config` is an optional partial configuration
    /// object; omitted fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Analyzer, JsValue> {
        let config: AtsConfig = if config.is_undefined() || config.is_null() {
            AtsConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(js_error)?
        };
        let inner = ResumeAnalyzer::new(config).map_err(js_error)?;
        Ok(Self { inner })
    }

    /// Fix the seed of the job-match jitter, or clear it with `undefined`.
    #[wasm_bindgen]
    pub fn set_seed(&mut self, seed: Option<u32>) {
        self.inner.set_seed(seed.map(u64::from));
    }

    /// Effective configuration as a plain object.
    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.config())
    }

    /// Analyze résumé text.
    #[wasm_bindgen]
    pub fn analyze(&self, text: &str, job_description: Option<String>) -> Result<JsValue, JsValue> {
        let result = self
            .inner
            .analyze_checked(text, job_description.as_deref())
            .map_err(js_error)?;
        to_js(&result)
    }

    /// Extract text from a PDF, DOCX or plain-text upload and analyze it.
    #[wasm_bindgen]
    pub fn analyze_document(
        &self,
        bytes: &[u8],
        media_type: &str,
        file_name: &str,
        job_description: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let document = Document::new(bytes.to_vec(), media_type, file_name);
        let result = self
            .inner
            .analyze_document(&document, job_description.as_deref())
            .map_err(js_error)?;
        to_js(&result)
    }

    /// Read a `File` from an `<input type="file">` and analyze it.
    #[wasm_bindgen]
    pub async fn analyze_file(
        &self,
        file: web_sys::File,
        job_description: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let buffer = JsFuture::from(file.array_buffer()).await?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        web_sys::console::debug_1(&format!("analyzing {} ({} bytes)", file.name(), bytes.len()).into());

        self.analyze_document(&bytes, &file.type_(), &file.name(), job_description)
    }

    /// Analyze text and build the payload that starts a job-search workflow.
    #[wasm_bindgen]
    pub fn job_search_request(&self, user_id: &str, text: &str) -> Result<JsValue, JsValue> {
        let result = self.inner.analyze_checked(text, None).map_err(js_error)?;
        to_js(&JobSearchRequest::from_analysis(user_id, &result))
    }
}

/// In-memory workflow store for demos and offline use.
#[wasm_bindgen]
#[derive(Default)]
pub struct WorkflowStore {
    inner: InMemoryWorkflowStore,
}

#[wasm_bindgen]
impl WorkflowStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a résumé; `roles` is an optional array of strings.
    #[wasm_bindgen]
    pub fn store_resume(&self, user_id: &str, resume_text: &str, roles: JsValue) -> Result<(), JsValue> {
        let roles: Vec<String> = if roles.is_undefined() || roles.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(roles).map_err(js_error)?
        };
        self.inner
            .store_resume(user_id, resume_text, roles)
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn get_resume(&self, user_id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.get_resume(user_id).map_err(js_error)?)
    }

    /// Start a job search from a request object (`user_id`, `resume_text`,
    /// `suggested_roles`, optional `keywords`).
    #[wasm_bindgen]
    pub fn trigger_job_search(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let request: JobSearchRequest = serde_wasm_bindgen::from_value(request).map_err(js_error)?;
        to_js(&self.inner.trigger_job_search(request).map_err(js_error)?)
    }

    #[wasm_bindgen]
    pub fn store_sheet(&self, request: JsValue) -> Result<(), JsValue> {
        let request: SheetStorageRequest =
            serde_wasm_bindgen::from_value(request).map_err(js_error)?;
        self.inner.store_sheet(request).map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn download_sheet(&self, user_id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.download_sheet(user_id).map_err(js_error)?)
    }

    #[wasm_bindgen]
    pub fn health(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.health())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const RESUME: &str = "Jane Doe\nEmail: jane@example.com\nProfessional Summary\n\
        Work Experience\nBuilt Python and React apps on AWS with Docker and Kubernetes\n\
        Education\nSkills: SQL, Git, Linux, TypeScript";

    fn field(value: &JsValue, name: &str) -> JsValue {
        js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_analyze_text() {
        let result = analyze_text(RESUME, None).unwrap();
        assert_eq!(field(&result, "industry").as_string().unwrap(), "technology");
        let matches = js_sys::Array::from(&field(&result, "jobMatches"));
        assert_eq!(matches.length(), 4);

        let percent = field(&matches.get(0), "match").as_f64().unwrap();
        assert!((45.0..=95.0).contains(&percent));
    }

    #[wasm_bindgen_test]
    fn test_short_text_is_rejected() {
        let err = analyze_text("too short", None).unwrap_err();
        assert!(err.as_string().unwrap().contains("sufficient text"));
    }

    #[wasm_bindgen_test]
    fn test_analyze_plain_text_document() {
        let result = analyze_document(RESUME.as_bytes(), "text/plain", "cv.txt", None).unwrap();
        assert!(field(&result, "overallScore").as_f64().unwrap() <= 100.0);
    }

    #[wasm_bindgen_test]
    fn test_seeded_analyzer_is_reproducible() {
        let mut analyzer = Analyzer::new(JsValue::UNDEFINED).unwrap();
        analyzer.set_seed(Some(9));

        let percents = |analyzer: &Analyzer| {
            let result = analyzer.analyze(RESUME, None).unwrap();
            js_sys::Array::from(&field(&result, "jobMatches"))
                .iter()
                .map(|m| field(&m, "match").as_f64().unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(percents(&analyzer), percents(&analyzer));
    }

    #[wasm_bindgen_test]
    fn test_workflow_store_round_trip() {
        let store = WorkflowStore::new();
        assert!(store.download_sheet("u1").is_err());

        let analyzer = Analyzer::new(JsValue::UNDEFINED).unwrap();
        let request = analyzer.job_search_request("u1", RESUME).unwrap();
        let response = store.trigger_job_search(request).unwrap();
        assert_eq!(field(&response, "success").as_bool(), Some(true));

        let sheet = store.download_sheet("u1").unwrap();
        assert_eq!(
            field(&sheet, "sheet_name").as_string().unwrap(),
            "LinkedIn Job Matches"
        );
    }
}

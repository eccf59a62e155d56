//! PDF text extraction using lopdf.

use lopdf::Document;
use tracing::{debug, trace};

use super::{DocumentExtractor, DocumentFormat, Result};
use crate::error::ExtractionError;

/// Page-ordered PDF text extractor.
///
/// Each page's text runs are joined with single spaces and the page is
/// terminated by one newline.
pub struct PdfExtractor;

impl PdfExtractor {
    fn load(data: &[u8]) -> Result<Document> {
        let mut doc = Document::load_mem(data).map_err(|e| ExtractionError::corrupt("PDF", e))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(ExtractionError::corrupt("PDF", "document is encrypted"));
            }
            debug!("Decrypted PDF with empty password");
        }

        Ok(doc)
    }
}

impl DocumentExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, data: &[u8]) -> Result<String> {
        let doc = Self::load(data)?;

        let pages = doc.get_pages();
        if pages.is_empty() {
            return Err(ExtractionError::corrupt("PDF", "document has no pages"));
        }
        debug!("Loaded PDF with {} pages", pages.len());

        let mut full_text = String::new();
        for &page_number in pages.keys() {
            let raw = doc.extract_text(&[page_number]).map_err(|e| {
                ExtractionError::corrupt("PDF", format!("page {}: {}", page_number, e))
            })?;
            let page_text = join_runs(&raw);
            trace!("Page {}: {} characters", page_number, page_text.len());

            full_text.push_str(&page_text);
            full_text.push('\n');
        }

        Ok(full_text)
    }
}

/// lopdf emits one line per text run; collapse them into a single line.
fn join_runs(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

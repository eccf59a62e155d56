//! Document text extraction.
//!
//! A [`Document`] is routed to one extractor by its declared media type and
//! file name: PDF, Word (OOXML), or plain text. Every extractor is fail-fast;
//! a decode error never yields partial text.

mod docx;
mod pdf;
mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

use std::path::Path;

use tracing::{debug, warn};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Extraction path chosen for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    /// `.doc` / `.docx` or a word-processor media type.
    Word,
    PlainText,
}

impl DocumentFormat {
    /// Pick the extraction path from the declared media type and file name.
    ///
    /// Anything that is neither PDF nor Word is treated as plain text, except
    /// media types that can never be text.
    pub fn detect(media_type: &str, file_name: &str) -> Result<Self> {
        let media_type = media_type.trim().to_ascii_lowercase();
        let file_name = file_name.to_ascii_lowercase();

        if media_type == "application/pdf" || file_name.ends_with(".pdf") {
            return Ok(Self::Pdf);
        }
        if media_type.contains("word") || file_name.ends_with(".docx") || file_name.ends_with(".doc") {
            return Ok(Self::Word);
        }
        if ["image/", "audio/", "video/"]
            .iter()
            .any(|prefix| media_type.starts_with(prefix))
        {
            return Err(ExtractionError::UnsupportedFormat(format!(
                "{} cannot contain résumé text",
                media_type
            )));
        }
        Ok(Self::PlainText)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Word => "Word",
            Self::PlainText => "text",
        }
    }
}

/// An uploaded document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw file bytes.
    pub data: Vec<u8>,
    /// Declared media type (may be empty).
    pub media_type: String,
    /// Original file name.
    pub file_name: String,
}

impl Document {
    pub fn new(data: Vec<u8>, media_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            data,
            media_type: media_type.into(),
            file_name: file_name.into(),
        }
    }

    /// Read a document from disk, guessing the media type from its extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let media_type = media_type_for_extension(
            path.extension().and_then(|e| e.to_str()).unwrap_or(""),
        );
        Ok(Self::new(data, media_type, file_name))
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Extraction path for this document.
    pub fn format(&self) -> Result<DocumentFormat> {
        DocumentFormat::detect(&self.media_type, &self.file_name)
    }
}

/// Media type conventionally used for a file extension.
pub fn media_type_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "",
    }
}

/// Decodes bytes of one document format into text.
pub trait DocumentExtractor {
    /// The format this extractor understands.
    fn format(&self) -> DocumentFormat;

    /// Decode the whole document.
    fn extract(&self, data: &[u8]) -> Result<String>;
}

/// Extract the text of a document.
pub fn extract_text(document: &Document) -> Result<String> {
    let format = document.format().inspect_err(|e| {
        warn!("Rejected {}: {}", document.file_name, e);
    })?;

    debug!(
        "Extracting {} ({} bytes) as {}",
        document.file_name,
        document.size(),
        format.name()
    );

    let extractor: &dyn DocumentExtractor = match format {
        DocumentFormat::Pdf => &PdfExtractor,
        DocumentFormat::Word => &DocxExtractor,
        DocumentFormat::PlainText => &PlainTextExtractor,
    };

    let text = extractor.extract(&document.data)?;
    debug!("Extracted {} characters", text.chars().count());
    Ok(text)
}

//! Error types for the ats-core library.

use thiserror::Error;

/// Main error type for the ats library.
#[derive(Error, Debug)]
pub enum AtsError {
    /// Document text extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Extraction succeeded but produced too little text to analyze.
    #[error(
        "unable to extract sufficient text from the file ({length} characters, at least {minimum} required). \
         Please ensure the file is not corrupted and contains readable text."
    )]
    InsufficientText { length: usize, minimum: usize },

    /// Workflow boundary error.
    #[error("workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning document bytes into text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No extraction path recognizes the document.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The format was recognized but the parser failed mid-decode.
    #[error("corrupt {format} document: {reason}")]
    CorruptDocument { format: String, reason: String },

    /// The document exceeds the configured size limit.
    #[error("document is {size} bytes, limit is {limit} bytes")]
    DocumentTooLarge { size: usize, limit: usize },
}

impl ExtractionError {
    pub(crate) fn corrupt(format: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptDocument {
            format: format.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors from the mock job-search workflow boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// One or more required request fields were empty.
    #[error("{} required", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Nothing is stored for the requested user.
    #[error("{what} not found for user {user_id}")]
    NotFound { what: &'static str, user_id: String },
}

/// Result type for the ats library.
pub type Result<T> = std::result::Result<T, AtsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = WorkflowError::MissingFields(vec!["user_id", "resume_text"]);
        assert_eq!(err.to_string(), "user_id, resume_text required");
    }

    #[test]
    fn test_insufficient_text_is_user_actionable() {
        let err = AtsError::InsufficientText {
            length: 9,
            minimum: 50,
        };
        let message = err.to_string();
        assert!(message.contains("9 characters"));
        assert!(message.contains("readable text"));
    }

    #[test]
    fn test_extraction_error_converts() {
        let err: AtsError = ExtractionError::corrupt("PDF", "bad xref").into();
        assert_eq!(err.to_string(), "extraction error: corrupt PDF document: bad xref");
    }
}

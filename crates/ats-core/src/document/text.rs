//! Plain text decoding.

use super::{DocumentExtractor, DocumentFormat, Result};
use crate::error::ExtractionError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes UTF-8 text as-is, minus a leading byte-order mark.
pub struct PlainTextExtractor;

impl DocumentExtractor for PlainTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    fn extract(&self, data: &[u8]) -> Result<String> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

        // NUL bytes mean a binary file that was sent without a media type.
        if data.contains(&0) {
            return Err(ExtractionError::UnsupportedFormat(
                "binary data is not plain text".to_string(),
            ));
        }

        String::from_utf8(data.to_vec()).map_err(|e| {
            ExtractionError::UnsupportedFormat(format!("text is not valid UTF-8: {}", e.utf8_error()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_utf8_passthrough() {
        let text = PlainTextExtractor.extract("Zoë Müller\r\n\tRust".as_bytes()).unwrap();
        assert_eq!(text, "Zoë Müller\r\n\tRust");
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut data = UTF8_BOM.to_vec();
        data.extend_from_slice(b"Summary");
        assert_eq!(PlainTextExtractor.extract(&data).unwrap(), "Summary");
    }

    #[test]
    fn test_invalid_utf8_is_unsupported() {
        let err = PlainTextExtractor.extract(&[b'a', 0xFF, 0xFE, b'b']).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_nul_bytes_are_unsupported() {
        let err = PlainTextExtractor.extract(b"PK\x03\x04\x00\x00").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(PlainTextExtractor.extract(b"").unwrap(), "");
    }
}

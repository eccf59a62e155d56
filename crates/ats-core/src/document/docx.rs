//! Word (OOXML) raw text extraction using zip and quick-xml.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::{DocumentExtractor, DocumentFormat, Result};
use crate::error::ExtractionError;

/// Signature of OLE2 compound files (Word 97-2003 `.doc`).
const OLE2_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts run text from `word/document.xml`, discarding styling.
///
/// Paragraphs end with a blank line, `w:tab` becomes a tab and `w:br` /
/// `w:cr` become newlines.
pub struct DocxExtractor;

impl DocumentExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Word
    }

    fn extract(&self, data: &[u8]) -> Result<String> {
        if data.starts_with(&OLE2_MAGIC) {
            return Err(ExtractionError::UnsupportedFormat(
                "legacy Word 97-2003 (.doc) files are not supported, save the file as .docx".to_string(),
            ));
        }

        let mut archive =
            zip::ZipArchive::new(Cursor::new(data)).map_err(|e| ExtractionError::corrupt("Word", e))?;
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| ExtractionError::corrupt("Word", format!("{}: {}", DOCUMENT_PART, e)))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| ExtractionError::corrupt("Word", e))?;
        debug!("Read {} bytes of document XML", xml.len());

        raw_text_from_xml(&xml)
    }
}

fn raw_text_from_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text = false;
    // <w:tabs> holds tab-stop definitions, not tab characters.
    let mut in_tab_stops = false;

    loop {
        match reader.read_event().map_err(|e| ExtractionError::corrupt("Word", e))? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"t" => in_text = true,
                b"tabs" => in_tab_stops = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"tabs" => in_tab_stops = false,
                b"p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if !in_tab_stops => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let run = t.unescape().map_err(|e| ExtractionError::corrupt("Word", e))?;
                text.push_str(&run);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

//! Text extraction from the supported document formats
//!
//! PDF pages are concatenated in page order with no separator; DOCX
//! paragraphs are joined with a single newline, matching paragraph order
//! in `word/document.xml`.

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeRankerError::Io)?;
        extract_pdf_from_bytes(&bytes).map_err(|e| match e {
            ResumeRankerError::PdfExtraction(msg) => {
                ResumeRankerError::PdfExtraction(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeRankerError::Io)?;
        extract_docx_from_bytes(&bytes).map_err(|e| match e {
            ResumeRankerError::DocxExtraction(msg) => {
                ResumeRankerError::DocxExtraction(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Extract plain text from a byte stream using a file-extension hint.
///
/// Anything other than `pdf` or `docx` fails with `UnsupportedFormat`;
/// no partial text is ever returned.
pub fn extract_text_from_bytes(bytes: &[u8], format_hint: &str) -> Result<String> {
    match FileType::from_extension(format_hint.trim_start_matches('.')) {
        FileType::Pdf => extract_pdf_from_bytes(bytes),
        FileType::Docx => extract_docx_from_bytes(bytes),
        FileType::Unknown => Err(ResumeRankerError::UnsupportedFormat(format!(
            "Only .pdf and .docx are allowed, got: .{}",
            format_hint.trim_start_matches('.')
        ))),
    }
}

/// Per-page text concatenated in page order, no separator between pages.
pub fn extract_pdf_from_bytes(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ResumeRankerError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))
}

/// Paragraph texts from `word/document.xml`, joined with a single newline.
pub fn extract_docx_from_bytes(bytes: &[u8]) -> Result<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ResumeRankerError::DocxExtraction(format!("Not a valid DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ResumeRankerError::DocxExtraction(format!("Missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ResumeRankerError::DocxExtraction(format!("Failed to read word/document.xml: {}", e)))?;

    parse_docx_paragraphs(&xml)
}

/// Pulls the text of `w:t` runs, splitting paragraphs on `w:p` boundaries.
fn parse_docx_paragraphs(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    let mut seen_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = true,
                b"p" => seen_paragraph = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            // Self-closing <w:p/> is an empty paragraph, kept as a blank line.
            Ok(Event::Empty(e)) if e.local_name().as_ref() == b"p" => {
                seen_paragraph = true;
                paragraphs.push(String::new());
            }
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| ResumeRankerError::DocxExtraction(format!("Malformed XML text: {}", e)))?;
                current.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ResumeRankerError::DocxExtraction(format!("Malformed document XML: {}", e)))
            }
            _ => {}
        }
    }

    // Text outside a closed paragraph still belongs to the document.
    if !current.is_empty() || !seen_paragraph {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}

//! Pulls ordered, trimmed, non-empty text lines out of an uploaded document.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported document type: {0}")]
    Unsupported(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Detects the kind from the file extension, falling back to magic bytes.
    pub fn detect(filename: Option<&str>, bytes: &[u8]) -> Result<Self, ExtractError> {
        let extension = filename
            .and_then(|f| f.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("docx") => return Ok(DocumentKind::Docx),
            Some("pdf") => return Ok(DocumentKind::Pdf),
            _ => {}
        }

        if bytes.starts_with(b"%PDF") {
            Ok(DocumentKind::Pdf)
        } else if bytes.starts_with(b"PK") {
            Ok(DocumentKind::Docx)
        } else {
            Err(ExtractError::Unsupported(
                filename.unwrap_or("<unnamed>").to_string(),
            ))
        }
    }
}

/// Extracts the document's text as lines ready for `sections::parse`.
pub fn extract_lines(bytes: &[u8], kind: DocumentKind) -> Result<Vec<String>, ExtractError> {
    let raw = match kind {
        DocumentKind::Docx => docx_paragraphs(bytes)?,
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?
            .lines()
            .map(String::from)
            .collect(),
    };

    Ok(normalize_lines(raw))
}

/// One string per body paragraph, concatenating the text of its runs.
fn docx_paragraphs(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(
                p.children
                    .iter()
                    .filter_map(|pc| match pc {
                        ParagraphChild::Run(run) => Some(run_text(&run.children)),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

/// Text of a run. A break inside the run becomes a newline, so a soft-broken
/// paragraph yields one line per visual line.
fn run_text(children: &[RunChild]) -> String {
    children
        .iter()
        .filter_map(|c| match c {
            RunChild::Text(t) => Some(t.text.as_str()),
            RunChild::Break(_) => Some("\n"),
            _ => None,
        })
        .collect()
}

fn normalize_lines(raw: Vec<String>) -> Vec<String> {
    raw.iter()
        .flat_map(|block| block.lines())
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

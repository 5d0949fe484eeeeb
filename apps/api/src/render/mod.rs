// Document rendering: ResumeRecord -> DOCX (flow) or PDF (page) bytes.
// Both renderers are synchronous and CPU-bound; async callers run them inside
// tokio::task::spawn_blocking.

pub mod flow;
pub mod page;
pub mod wrap;

use std::str::FromStr;

use thiserror::Error;

pub use flow::render_flow;
pub use page::render_page;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{section} item {index} is missing required field '{field}'")]
    MissingField {
        section: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("failed to encode {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },
}

/// Returns the value of a required item field, or a `MissingField` error.
pub(crate) fn require<'a>(
    value: &'a Option<String>,
    section: &'static str,
    index: usize,
    field: &'static str,
) -> Result<&'a str, RenderError> {
    value.as_deref().ok_or(RenderError::MissingField {
        section,
        index,
        field,
    })
}

/// Output formats accepted by `/export-resume/:format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Docx,
    Pdf,
}

#[derive(Debug, Error)]
#[error("Unsupported format: {0}")]
pub struct UnsupportedFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ExportFormat::Json),
            "docx" => Ok(ExportFormat::Docx),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(UnsupportedFormat(other.to_string())),
        }
    }
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parses_known_names() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    }

    #[test]
    fn test_export_format_rejects_unknown() {
        let err = "odt".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported format: odt");
    }

    #[test]
    fn test_require_reports_section_and_field() {
        let err = require(&None, "experience", 2, "company").unwrap_err();
        assert_eq!(
            err.to_string(),
            "experience item 2 is missing required field 'company'"
        );
    }
}

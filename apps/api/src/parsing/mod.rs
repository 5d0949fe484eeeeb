// Resume ingestion: document bytes -> text lines -> ResumeRecord.
// Extraction is I/O-shaped and fallible; section parsing is pure and never fails.

pub mod extract;
pub mod sections;

pub use extract::{extract_lines, DocumentKind, ExtractError};
pub use sections::parse;

//! Flow document renderer — ResumeRecord to DOCX.
//!
//! Headings and paragraphs only; the word processor handles wrapping and pagination.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};

use crate::models::ResumeRecord;
use crate::render::{require, RenderError};

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// Renders the record as a DOCX byte stream.
///
/// Section order is fixed: name, Summary, Experience, Education, Skills.
pub fn render_flow(record: &ResumeRecord) -> Result<Vec<u8>, RenderError> {
    let mut docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        )
        .add_paragraph(styled(TITLE_STYLE, &record.name));

    docx = docx
        .add_paragraph(styled(HEADING_STYLE, "Summary"))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(&record.summary)));

    docx = docx.add_paragraph(styled(HEADING_STYLE, "Experience"));
    for (i, exp) in record.experience.iter().enumerate() {
        let company = require(&exp.company, "experience", i, "company")?;
        let role = require(&exp.role, "experience", i, "role")?;
        let duration = require(&exp.duration, "experience", i, "duration")?;

        let mut p = Paragraph::new()
            .add_run(line_run(&format!("{company} - {role}")).bold())
            .add_run(line_run(&format!("Duration: {duration}")));
        if let Some(description) = exp.description.as_deref().filter(|d| !d.is_empty()) {
            p = p.add_run(Run::new().add_text(description));
        }
        docx = docx.add_paragraph(p).add_paragraph(Paragraph::new());
    }

    docx = docx.add_paragraph(styled(HEADING_STYLE, "Education"));
    for (i, edu) in record.education.iter().enumerate() {
        let institution = require(&edu.institution, "education", i, "institution")?;
        let degree = require(&edu.degree, "education", i, "degree")?;
        let year = require(&edu.year, "education", i, "year")?;

        let mut p = Paragraph::new()
            .add_run(line_run(institution).bold())
            .add_run(line_run(&format!("{degree} - {year}")));
        if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
            p = p.add_run(Run::new().add_text(format!("GPA: {gpa}")));
        }
        docx = docx.add_paragraph(p).add_paragraph(Paragraph::new());
    }

    docx = docx
        .add_paragraph(styled(HEADING_STYLE, "Skills"))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(record.skills.join(", "))));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| RenderError::Encode {
            format: "docx",
            message: e.to_string(),
        })?;
    Ok(buf.into_inner())
}

fn styled(style: &str, text: &str) -> Paragraph {
    Paragraph::new()
        .style(style)
        .add_run(Run::new().add_text(text))
}

/// A run followed by a line break inside the same paragraph.
fn line_run(text: &str) -> Run {
    Run::new().add_text(text).add_break(BreakType::TextWrapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationItem, ExperienceItem};
    use crate::parsing::{extract_lines, DocumentKind};

    fn sample_record() -> ResumeRecord {
        ResumeRecord {
            name: "Jane Doe".to_string(),
            summary: "Backend engineer".to_string(),
            experience: vec![ExperienceItem {
                company: Some("Acme".to_string()),
                role: Some("Engineer".to_string()),
                duration: Some("2019-2022".to_string()),
                description: Some("Built billing".to_string()),
                ..Default::default()
            }],
            education: vec![EducationItem {
                institution: Some("MIT".to_string()),
                degree: Some("BSc".to_string()),
                year: Some("2018".to_string()),
                gpa: Some("3.9".to_string()),
                ..Default::default()
            }],
            skills: vec!["Rust".to_string(), "Go".to_string()],
        }
    }

    #[test]
    fn test_output_is_a_zip_package() {
        let bytes = render_flow(&sample_record()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let bytes = render_flow(&sample_record()).unwrap();
        let lines = extract_lines(&bytes, DocumentKind::Docx).unwrap();

        let position = |needle: &str| {
            lines
                .iter()
                .position(|l| l.contains(needle))
                .unwrap_or_else(|| panic!("{needle} not found in {lines:?}"))
        };

        assert_eq!(lines[0], "Jane Doe");
        assert!(position("Summary") < position("Backend engineer"));
        assert!(position("Backend engineer") < position("Experience"));
        assert!(position("Experience") < position("Acme - Engineer"));
        assert!(position("Acme - Engineer") < position("Education"));
        assert!(position("Education") < position("MIT"));
        assert!(position("MIT") < position("Skills"));
        assert_eq!(lines.last().map(String::as_str), Some("Rust, Go"));
    }

    #[test]
    fn test_item_paragraph_carries_all_lines() {
        let bytes = render_flow(&sample_record()).unwrap();
        let lines = extract_lines(&bytes, DocumentKind::Docx).unwrap();

        let exp = lines.iter().position(|l| l == "Acme - Engineer").unwrap();
        assert_eq!(
            lines[exp..exp + 3],
            ["Acme - Engineer", "Duration: 2019-2022", "Built billing"]
        );

        let edu = lines.iter().position(|l| l == "MIT").unwrap();
        assert_eq!(lines[edu..edu + 3], ["MIT", "BSc - 2018", "GPA: 3.9"]);
    }

    #[test]
    fn test_empty_record_renders() {
        let bytes = render_flow(&ResumeRecord::default()).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_missing_duration_is_a_render_failure() {
        let mut record = sample_record();
        record.experience[0].duration = None;
        let err = render_flow(&record).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingField {
                section: "experience",
                index: 0,
                field: "duration"
            }
        ));
    }

    #[test]
    fn test_missing_year_is_a_render_failure() {
        let mut record = sample_record();
        record.education[0].year = None;
        assert!(matches!(
            render_flow(&record),
            Err(RenderError::MissingField { field: "year", .. })
        ));
    }
}

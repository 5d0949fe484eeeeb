//! Page document renderer — ResumeRecord to a single-page PDF.
//!
//! # Layout
//! - US letter, left margin 50pt, cursor starts at y = 750 and only moves down
//! - paragraphs are greedy-wrapped at `WRAP_CHARS` characters (see `wrap.rs`)
//! - there is no pagination: content past the bottom edge is still emitted at
//!   negative y and will be clipped by viewers
//!
//! Layout is computed as `TextCommand`s first, then encoded into one content stream.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::models::ResumeRecord;
use crate::render::wrap::{wrap_words, WRAP_CHARS};
use crate::render::{require, RenderError};

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN_LEFT: f32 = 50.0;
pub const CURSOR_START: f32 = 750.0;

const NAME_SIZE: f32 = 24.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

const LINE_HEIGHT: f32 = 15.0;
const NAME_GAP: f32 = 40.0;
const HEADING_GAP: f32 = 20.0;
const SUMMARY_GAP: f32 = 30.0;
const ITEM_GAP: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }
}

/// One absolutely positioned line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub size: f32,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout
// ────────────────────────────────────────────────────────────────────────────

/// Running vertical cursor that records draw commands.
struct PageCursor {
    y: f32,
    commands: Vec<TextCommand>,
}

impl PageCursor {
    fn new() -> Self {
        Self {
            y: CURSOR_START,
            commands: Vec::new(),
        }
    }

    fn draw(&mut self, font: Font, size: f32, text: impl Into<String>) {
        self.commands.push(TextCommand {
            x: MARGIN_LEFT,
            y: self.y,
            font,
            size,
            text: text.into(),
        });
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn heading(&mut self, title: &str) {
        self.draw(Font::Bold, HEADING_SIZE, title);
        self.advance(HEADING_GAP);
    }

    /// Draws wrapped body text. The cursor drops one line height between wrapped
    /// lines and stays on the last line, so callers add their own trailing gap.
    fn paragraph(&mut self, text: &str) {
        for (i, line) in wrap_words(text, WRAP_CHARS).into_iter().enumerate() {
            if i > 0 {
                self.advance(LINE_HEIGHT);
            }
            self.draw(Font::Regular, BODY_SIZE, line);
        }
    }
}

/// Computes every text placement for the record without encoding anything.
pub fn layout_page(record: &ResumeRecord) -> Result<Vec<TextCommand>, RenderError> {
    let mut page = PageCursor::new();

    page.draw(Font::Bold, NAME_SIZE, record.name.as_str());
    page.advance(NAME_GAP);

    page.heading("Summary");
    page.paragraph(&record.summary);
    page.advance(SUMMARY_GAP);

    page.heading("Experience");
    for (i, exp) in record.experience.iter().enumerate() {
        let company = require(&exp.company, "experience", i, "company")?;
        let role = require(&exp.role, "experience", i, "role")?;
        let duration = require(&exp.duration, "experience", i, "duration")?;

        page.draw(Font::Bold, BODY_SIZE, format!("{company} - {role}"));
        page.advance(LINE_HEIGHT);
        page.draw(Font::Regular, BODY_SIZE, format!("Duration: {duration}"));
        page.advance(LINE_HEIGHT);
        if let Some(description) = exp.description.as_deref().filter(|d| !d.is_empty()) {
            page.paragraph(description);
        }
        page.advance(ITEM_GAP);
    }

    page.heading("Education");
    for (i, edu) in record.education.iter().enumerate() {
        let institution = require(&edu.institution, "education", i, "institution")?;
        let degree = require(&edu.degree, "education", i, "degree")?;
        let year = require(&edu.year, "education", i, "year")?;

        page.draw(Font::Bold, BODY_SIZE, institution);
        page.advance(LINE_HEIGHT);
        page.draw(Font::Regular, BODY_SIZE, format!("{degree} - {year}"));
        page.advance(LINE_HEIGHT);
        if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
            page.draw(Font::Regular, BODY_SIZE, format!("GPA: {gpa}"));
        }
        page.advance(ITEM_GAP);
    }

    page.heading("Skills");
    page.paragraph(&record.skills.join(", "));

    Ok(page.commands)
}

// ────────────────────────────────────────────────────────────────────────────
// PDF encoding
// ────────────────────────────────────────────────────────────────────────────

/// Renders the record as a single-page PDF byte stream.
pub fn render_page(record: &ResumeRecord) -> Result<Vec<u8>, RenderError> {
    let commands = layout_page(record)?;
    encode_pdf(&commands)
}

fn encode_pdf(commands: &[TextCommand]) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(standard_font("Helvetica"));
    let bold_id = doc.add_object(standard_font("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource_name() => regular_id,
            Font::Bold.resource_name() => bold_id,
        },
    });

    let content: Content = Content {
        operations: commands.iter().flat_map(text_operations).collect(),
    };
    let encoded = content.encode().map_err(encode_error)?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(encode_error)?;
    Ok(buf)
}

fn standard_font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn text_operations(cmd: &TextCommand) -> [Operation; 5] {
    [
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![cmd.font.resource_name().into(), cmd.size.into()],
        ),
        Operation::new("Td", vec![cmd.x.into(), cmd.y.into()]),
        Operation::new("Tj", vec![Object::string_literal(win_ansi(&cmd.text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Encodes text for the standard fonts. Latin-1 maps directly; anything else becomes `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

fn encode_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Encode {
        format: "pdf",
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationItem, ExperienceItem};

    fn experience(description: Option<&str>) -> ExperienceItem {
        ExperienceItem {
            company: Some("Acme".to_string()),
            role: Some("Engineer".to_string()),
            duration: Some("2019-2022".to_string()),
            description: description.map(String::from),
            ..Default::default()
        }
    }

    fn record() -> ResumeRecord {
        ResumeRecord {
            name: "Jane Doe".to_string(),
            summary: "Backend engineer".to_string(),
            experience: vec![experience(Some("Built billing"))],
            education: vec![EducationItem {
                institution: Some("MIT".to_string()),
                degree: Some("BSc".to_string()),
                year: Some("2018".to_string()),
                gpa: None,
                ..Default::default()
            }],
            skills: vec!["Rust".to_string(), "Go".to_string()],
        }
    }

    fn find<'a>(commands: &'a [TextCommand], text: &str) -> &'a TextCommand {
        commands
            .iter()
            .find(|c| c.text == text)
            .unwrap_or_else(|| panic!("no command drawing {text:?}"))
    }

    #[test]
    fn test_layout_positions_follow_fixed_gaps() {
        let commands = layout_page(&record()).unwrap();

        let name = find(&commands, "Jane Doe");
        assert_eq!((name.x, name.y, name.font, name.size), (50.0, 750.0, Font::Bold, 24.0));
        assert_eq!(find(&commands, "Summary").y, 710.0);
        assert_eq!(find(&commands, "Backend engineer").y, 690.0);
        assert_eq!(find(&commands, "Experience").y, 660.0);

        let title = find(&commands, "Acme - Engineer");
        assert_eq!((title.y, title.font), (640.0, Font::Bold));
        assert_eq!(find(&commands, "Duration: 2019-2022").y, 625.0);
        assert_eq!(find(&commands, "Built billing").y, 610.0);

        assert_eq!(find(&commands, "Education").y, 590.0);
        assert_eq!(find(&commands, "MIT").y, 570.0);
        assert_eq!(find(&commands, "BSc - 2018").y, 555.0);
        assert_eq!(find(&commands, "Skills").y, 520.0);
        assert_eq!(find(&commands, "Rust, Go").y, 500.0);
    }

    #[test]
    fn test_long_summary_wraps_and_pushes_cursor_down() {
        let mut r = record();
        r.summary = "word ".repeat(40);
        let commands = layout_page(&r).unwrap();

        let summary_lines: Vec<&TextCommand> = commands
            .iter()
            .filter(|c| c.text.starts_with("word"))
            .collect();
        assert_eq!(summary_lines.len(), 3);
        assert_eq!(summary_lines[0].y, 690.0);
        assert_eq!(summary_lines[1].y, 675.0);
        assert_eq!(summary_lines[2].y, 660.0);
        assert_eq!(find(&commands, "Experience").y, 630.0);
        assert!(summary_lines.iter().all(|c| c.text.chars().count() <= WRAP_CHARS));
    }

    #[test]
    fn test_oversized_summary_word_is_drawn_once() {
        let mut r = record();
        r.summary = "y".repeat(71);
        let commands = layout_page(&r).unwrap();
        let drawn: Vec<_> = commands.iter().filter(|c| c.text.starts_with('y')).collect();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].y, 690.0);
    }

    #[test]
    fn test_overflow_is_drawn_below_the_page() {
        let mut r = record();
        r.experience = (0..20).map(|_| experience(Some("Built billing"))).collect();
        let commands = layout_page(&r).unwrap();
        let lowest = commands.iter().map(|c| c.y).fold(f32::MAX, f32::min);
        assert!(lowest < 0.0, "expected content past the bottom edge, lowest y = {lowest}");
    }

    #[test]
    fn test_missing_company_is_a_render_failure() {
        let mut r = record();
        r.experience[0].company = None;
        assert!(matches!(
            layout_page(&r),
            Err(RenderError::MissingField {
                section: "experience",
                field: "company",
                ..
            })
        ));
    }

    #[test]
    fn test_render_page_produces_parseable_pdf() {
        let bytes = render_page(&record()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_win_ansi_replaces_non_latin() {
        assert_eq!(win_ansi("Café"), vec![b'C', b'a', b'f', 0xE9]);
        assert_eq!(win_ansi("日本"), b"??".to_vec());
    }
}

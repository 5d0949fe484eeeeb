//! Section Parser — turns extracted resume lines into a `ResumeRecord`.
//!
//! # Line convention
//! - line 1 is the name, line 2 the summary
//! - a line reading `Experience`, `Education` or `Skills` (any case) switches section
//! - inside Experience/Education, `"Left - Right"` opens a new item; the first
//!   undelimited line after it becomes the item's description
//! - inside Skills, a comma-separated line replaces the skills list
//!
//! A pending item is filed under the section active when it is flushed: the next
//! delimiter line, or the end of input. At the end of input inside Skills it is
//! dropped.
//!
//! Parsing never fails. Lines before the first header are dropped.

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{EducationItem, ExperienceItem, ResumeRecord};

/// Delimiter separating the two header parts of an experience/education item.
pub const ITEM_DELIMITER: &str = " - ";

const UNTITLED: &str = "Untitled";

// ────────────────────────────────────────────────────────────────────────────
// State machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Experience,
    Education,
    Skills,
}

impl Section {
    /// Recognizes a section header line. Header lines never carry data.
    fn from_header(line: &str) -> Option<Self> {
        match line.to_lowercase().as_str() {
            "experience" => Some(Section::Experience),
            "education" => Some(Section::Education),
            "skills" => Some(Section::Skills),
            _ => None,
        }
    }
}

/// The item currently being accumulated, as loose attributes. Its shape is only
/// fixed when it is flushed, into the list of whichever section is active then.
#[derive(Debug, Default)]
struct PendingItem {
    attrs: BTreeMap<String, String>,
}

impl PendingItem {
    fn open(section: Section, line: &str) -> Option<Self> {
        let (left_key, right_key) = match section {
            Section::Experience => ("company", "role"),
            Section::Education => ("institution", "degree"),
            Section::None | Section::Skills => return None,
        };
        let (left, right) = split_item_header(line);
        let mut item = Self::default();
        item.attrs.insert(left_key.to_string(), left);
        item.attrs.insert(right_key.to_string(), right);
        Some(item)
    }

    /// Claims `line` as the description if none has been set yet.
    /// Claiming also blanks `duration`.
    fn claim_description(&mut self, line: &str) {
        if !self.attrs.contains_key("description") {
            self.attrs
                .insert("description".to_string(), line.to_string());
            self.attrs.insert("duration".to_string(), String::new());
        }
    }

    fn into_experience(mut self) -> ExperienceItem {
        ExperienceItem {
            company: self.attrs.remove("company"),
            role: self.attrs.remove("role"),
            duration: self.attrs.remove("duration"),
            description: self.attrs.remove("description"),
            extra: self.attrs,
        }
    }

    fn into_education(mut self) -> EducationItem {
        EducationItem {
            institution: self.attrs.remove("institution"),
            degree: self.attrs.remove("degree"),
            year: self.attrs.remove("year"),
            gpa: self.attrs.remove("gpa"),
            extra: self.attrs,
        }
    }
}

struct SectionParser {
    section: Section,
    pending: Option<PendingItem>,
    experience: Vec<ExperienceItem>,
    education: Vec<EducationItem>,
    skills: Vec<String>,
}

impl SectionParser {
    fn new() -> Self {
        Self {
            section: Section::None,
            pending: None,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        if let Some(section) = Section::from_header(line) {
            self.section = section;
            return;
        }

        match self.section {
            Section::None => debug!(line, "Dropping line outside any section"),
            Section::Skills => self.skills = split_skills(line),
            Section::Experience | Section::Education => {
                if line.contains(ITEM_DELIMITER) {
                    self.flush();
                    self.pending = PendingItem::open(self.section, line);
                } else if let Some(item) = self.pending.as_mut() {
                    item.claim_description(line);
                }
            }
        }
    }

    /// Files the pending item under the active section.
    fn flush(&mut self) {
        let Some(item) = self.pending.take() else {
            return;
        };
        match self.section {
            Section::Experience => self.experience.push(item.into_experience()),
            Section::Education => self.education.push(item.into_education()),
            Section::None | Section::Skills => {
                debug!(section = ?self.section, item = ?item.attrs, "Dropping pending item");
            }
        }
    }

    fn finish(mut self, name: String, summary: String) -> ResumeRecord {
        self.flush();
        ResumeRecord {
            name,
            summary,
            experience: self.experience,
            education: self.education,
            skills: self.skills,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Parses an ordered sequence of resume lines into a `ResumeRecord`.
///
/// Lines are trimmed and blank lines skipped before classification.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> ResumeRecord {
    let lines: Vec<&str> = lines
        .iter()
        .map(|l| l.as_ref().trim())
        .filter(|l| !l.is_empty())
        .collect();

    let name = lines.first().copied().unwrap_or(UNTITLED).to_string();
    let summary = lines.get(1).copied().unwrap_or_default().to_string();

    let mut parser = SectionParser::new();
    for line in lines.iter().skip(2) {
        parser.feed(line);
    }
    parser.finish(name, summary)
}

/// Splits `"Left - Right - More"` into `("Left", "Right")`.
/// Text after a second delimiter is ignored; a missing right part is `""`.
fn split_item_header(line: &str) -> (String, String) {
    let mut parts = line.split(ITEM_DELIMITER);
    let left = parts.next().unwrap_or_default().to_string();
    let right = parts.next().unwrap_or_default().to_string();
    (left, right)
}

fn split_skills(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

//! Field Enhancer — prefixes resume fields with randomly chosen template phrases.
//!
//! Enhancement fails open: any decode or shape problem returns the input untouched
//! and is logged, never propagated.

use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::enhance::phrases;

// ────────────────────────────────────────────────────────────────────────────
// Content and field types
// ────────────────────────────────────────────────────────────────────────────

/// A field value as sent by the editor: plain text, or a list of flat objects
/// for experience/education. A list may also arrive JSON-encoded inside `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldContent {
    Text(String),
    List(Vec<Map<String, Value>>),
}

impl FieldContent {
    /// String form of the content. Lists are JSON-encoded.
    pub fn into_text(self) -> String {
        match self {
            FieldContent::Text(text) => text,
            FieldContent::List(items) => Value::from(items).to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Summary,
    Experience,
    Education,
    Skills,
}

impl Field {
    /// Case-insensitive lookup; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "name" => Some(Field::Name),
            "summary" => Some(Field::Summary),
            "experience" => Some(Field::Experience),
            "education" => Some(Field::Education),
            "skills" => Some(Field::Skills),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("content is not a JSON array of objects: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("item {index} key '{key}' is not text")]
    NonTextValue { index: usize, key: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Random source
// ────────────────────────────────────────────────────────────────────────────

/// Chooses one phrase out of a table. Injected so tests can be deterministic.
pub trait PhrasePicker {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    fn pick(&mut self, phrases: &[&'static str]) -> &'static str {
        phrases[self.pick_index(phrases.len()) % phrases.len()]
    }
}

/// Uniform choice backed by any `rand::Rng`.
pub struct RandomPicker<R>(pub R);

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        RandomPicker(rand::rng())
    }
}

impl<R: Rng> PhrasePicker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Enhances `content` as the named field. Unknown field names are returned unchanged.
///
/// Experience and education always come back as `Text` holding a JSON array,
/// whether they arrived encoded or as a list.
pub fn enhance<P: PhrasePicker>(field: &str, content: FieldContent, picker: &mut P) -> FieldContent {
    let Some(kind) = Field::from_name(field) else {
        return content;
    };

    match (kind, content) {
        (Field::Name, FieldContent::Text(text)) => {
            FieldContent::Text(prefix_text(text, phrases::NAME, picker))
        }
        (Field::Summary, FieldContent::Text(text)) => {
            FieldContent::Text(prefix_text(text, phrases::SUMMARY, picker))
        }
        (Field::Skills, FieldContent::Text(text)) => {
            FieldContent::Text(prefix_skills(&text, picker))
        }
        (Field::Experience | Field::Education, content) => {
            let table = match kind {
                Field::Experience => phrases::EXPERIENCE,
                _ => phrases::EDUCATION,
            };
            match enhance_items(&content, table, picker) {
                Ok(items) => FieldContent::Text(Value::from(items).to_string()),
                Err(e) => {
                    warn!(field, error = %e, "Enhancement failed, returning content unchanged");
                    content
                }
            }
        }
        // Plain-text fields given a list: nothing to prefix.
        (_, content) => content,
    }
}

/// String-in, string-out form of `enhance`. This is what the editor sends for
/// every field, list fields included (JSON-encoded).
pub fn enhance_text<P: PhrasePicker>(field: &str, content: &str, picker: &mut P) -> String {
    enhance(field, FieldContent::Text(content.to_string()), picker).into_text()
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

fn prefix_text<P: PhrasePicker>(text: String, table: &[&'static str], picker: &mut P) -> String {
    if text.trim().is_empty() {
        return text;
    }
    format!("{}{text}", picker.pick(table))
}

fn prefix_skills<P: PhrasePicker>(text: &str, picker: &mut P) -> String {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|skill| format!("{}{skill}", picker.pick(phrases::SKILLS)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn enhance_items<P: PhrasePicker>(
    content: &FieldContent,
    table: &[(&str, &'static [&'static str])],
    picker: &mut P,
) -> Result<Vec<Map<String, Value>>, EnhanceError> {
    let items = match content {
        FieldContent::Text(text) => serde_json::from_str::<Vec<Map<String, Value>>>(text)?,
        FieldContent::List(items) => items.clone(),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.into_iter()
                .map(|(key, value)| {
                    let Some(prefixes) = phrases::for_key(table, &key) else {
                        return Ok((key, value));
                    };
                    match value {
                        Value::String(s) if !s.trim().is_empty() => {
                            let enhanced = format!("{}{s}", picker.pick(prefixes));
                            Ok((key, Value::String(enhanced)))
                        }
                        v if is_blank(&v) => Ok((key, v)),
                        _ => Err(EnhanceError::NonTextValue { index, key }),
                    }
                })
                .collect::<Result<Map<String, Value>, EnhanceError>>()
        })
        .collect()
}

/// Values that carry nothing to prefix: null, false, zero, and empty strings/containers.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

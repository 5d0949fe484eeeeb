// Field enhancement: random template prefixes applied per field.
// The random source is injected through `PhrasePicker`; nothing here is global.

pub mod enhancer;
pub mod phrases;

pub use enhancer::{enhance, enhance_text, FieldContent, RandomPicker};

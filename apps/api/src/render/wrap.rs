//! Greedy word-wrap by character count.
//!
//! This is an approximation: the threshold counts characters, not rendered glyph
//! width, so proportional fonts will not fill lines evenly.

/// Lines longer than this many characters are broken before the overflowing word.
pub const WRAP_CHARS: usize = 70;

/// Greedy word-wrap. Returns the lines in order; empty input returns no lines.
///
/// Words are added to a candidate line until its joined length exceeds `max_chars`;
/// the words before the overflowing one are emitted and the overflowing word starts
/// the next line. A word longer than `max_chars` ends up alone on its own line.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if candidate_len > max_chars && !current.is_empty() {
            lines.push(current.join(" "));
            current.clear();
            current_len = word_len;
        } else {
            current_len = candidate_len;
        }
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

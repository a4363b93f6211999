//! Character-count text wrapping.
//!
//! Counts are a stand-in for pixel widths of one font; they do not promise alignment
//! under a different font.

pub const ELLIPSIS: char = '\u{2026}';

/// Greedy word wrap: a word moves to a new line when appending it would push the line
/// past `max_chars`. A single word longer than `max_chars` keeps its own line.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Wraps, then cuts to `max_lines`. If anything was dropped, or a line is still longer
/// than `max_chars`, that line ends in an ellipsis.
pub fn wrap_and_truncate(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let max_lines = max_lines.max(1);
    let mut lines = wrap_words(text, max_chars);
    let overflow = lines.len() > max_lines;
    lines.truncate(max_lines);

    let last = lines.len() - 1;
    for (idx, line) in lines.iter_mut().enumerate() {
        let too_long = line.chars().count() > max_chars;
        if too_long || (overflow && idx == last) {
            *line = with_ellipsis(line, max_chars);
        }
    }
    lines
}

fn with_ellipsis(line: &str, max_chars: usize) -> String {
    let keep = max_chars.saturating_sub(1);
    let mut out: String = line.chars().take(keep).collect();
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push(ELLIPSIS);
    out
}

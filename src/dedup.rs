use std::collections::HashSet;

use tracing::debug;

/// Outcome of collapsing duplicate lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduplication<'a> {
    pub original_count: usize,
    /// Distinct lines, first occurrence wins.
    pub unique_lines: Vec<&'a str>,
}

impl<'a> Deduplication<'a> {
    pub fn unique_count(&self) -> usize {
        self.unique_lines.len()
    }

    pub fn unique_set(&self) -> HashSet<&'a str> {
        self.unique_lines.iter().copied().collect()
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `text` on line boundaries.
///
/// `\r\n` counts as a single boundary. A boundary at the very end of the
/// text does not start another line, so `""` has no lines and `"\n"` has one
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

pub fn deduplicate(text: &str) -> Deduplication<'_> {
    let lines = split_lines(text);
    let mut seen = HashSet::with_capacity(lines.len());
    let unique_lines: Vec<&str> = lines.iter().copied().filter(|line| seen.insert(*line)).collect();

    debug!(
        original = lines.len(),
        unique = unique_lines.len(),
        "deduplicated lines"
    );

    Deduplication {
        original_count: lines.len(),
        unique_lines,
    }
}

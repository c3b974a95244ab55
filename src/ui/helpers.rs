//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across the UI components: cursor positioning,
//! search match highlighting and word wrapping for the job description.
//!
//! All widths are counted in characters, not bytes, so titles with accents
//! or CJK text pad the same way ASCII does.
//!
//! # Example
//!
//! ```rust
//! use zjobs::ui::helpers::wrap_text;
//!
//! let lines = wrap_text("Build and run distributed systems", 12);
//! assert_eq!(lines, vec!["Build and", "run", "distributed", "systems"]);
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` cut to `width` characters and pads the rest with spaces.
pub fn print_padded(text: &str, width: usize) {
    let shown: String = text.chars().take(width).collect();
    let len = visual_len(&shown);
    print!("{shown}{}", " ".repeat(width.saturating_sub(len)));
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive. When
/// `is_selected` is `true` highlighting is skipped so the selection
/// background stays uniform.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Greedy word wrap to `width` characters.
///
/// Words longer than a line are split. Whitespace runs collapse to one space.
/// Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }
        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line_len += word.len();
        line.extend(word);
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap_text("We are hiring a senior Rust engineer", 14),
            vec!["We are hiring", "a senior Rust", "engineer"]
        );
    }

    #[test]
    fn wrap_splits_words_longer_than_a_line() {
        assert_eq!(wrap_text("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("  \n\t ", 10).is_empty());
    }

    #[test]
    fn visual_len_counts_characters() {
        assert_eq!(visual_len("Zürich"), 6);
    }
}

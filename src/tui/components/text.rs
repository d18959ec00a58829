//! Width-aware text helpers shared by the components.
//!
//! Widths are terminal cells as reported by `unicode-width`, so wide
//! characters such as CJK text and emoji count twice.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::models::RatingClass;

const ELLIPSIS: char = '…';
const ANSI_RESET: &str = "\x1b[0m";

/// Wraps `text` in the SGR colour for `class`.
#[must_use]
pub(crate) fn paint(text: &str, class: RatingClass) -> String {
    format!("\x1b[{}m{text}{ANSI_RESET}", class.ansi_colour())
}

/// Collapses line breaks and truncates `text` to at most `width` cells.
///
/// Truncated text ends with an ellipsis.
#[must_use]
pub(crate) fn truncate_display(text: &str, width: usize) -> String {
    let flattened: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();

    if UnicodeWidthStr::width(flattened.as_str()) <= width {
        return flattened;
    }
    if width == 0 {
        return String::new();
    }

    let budget = width.saturating_sub(1);
    let mut output = String::new();
    let mut used = 0_usize;
    for ch in flattened.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > budget {
            break;
        }
        output.push(ch);
        used = used.saturating_add(ch_width);
    }
    output.push(ELLIPSIS);
    output
}

/// Truncates `text` to `width` cells, then pads it with spaces to exactly
/// that width.
#[must_use]
pub(crate) fn pad_display(text: &str, width: usize) -> String {
    let mut padded = truncate_display(text, width);
    let used = UnicodeWidthStr::width(padded.as_str());
    padded.push_str(&" ".repeat(width.saturating_sub(used)));
    padded
}

/// Wraps `text` at word boundaries so no line exceeds `width` cells.
///
/// Existing line breaks are kept and blank lines survive as empty entries.
/// Words wider than `width` are split across lines.
#[must_use]
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.lines().map(ToOwned::to_owned).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0_usize;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width.saturating_add(1).saturating_add(word_width)
            };

            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width > width {
                for piece in split_word(word, width) {
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                    }
                    current_width = UnicodeWidthStr::width(piece.as_str());
                    current = piece;
                }
                continue;
            }

            if !current.is_empty() {
                current.push(' ');
                current_width = current_width.saturating_add(1);
            }
            current.push_str(word);
            current_width = current_width.saturating_add(word_width);
        }

        lines.push(current);
    }
    lines
}

fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut used = 0_usize;
    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            used = 0;
        }
        piece.push(ch);
        used = used.saturating_add(ch_width);
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

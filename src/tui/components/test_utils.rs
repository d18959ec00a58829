//! Helpers for asserting on rendered component output.

/// Removes CSI escape sequences (`ESC [ ... final`) from rendered text.
///
/// # Example
///
/// ```
/// use feedback_console::tui::components::test_utils::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[32m4.50\x1b[0m"), "4.50");
/// ```
#[must_use]
pub fn strip_ansi_codes(rendered: &str) -> String {
    let mut plain = String::with_capacity(rendered.len());
    let mut chars = rendered.chars();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            plain.push(ch);
            continue;
        }
        // Parameters run until the first alphabetic final byte.
        for escaped in chars.by_ref() {
            if escaped.is_ascii_alphabetic() {
                break;
            }
        }
    }

    plain
}

/// Returns the rendered lines with escape sequences removed.
#[must_use]
pub fn plain_lines(rendered: &str) -> Vec<String> {
    strip_ansi_codes(rendered)
        .lines()
        .map(ToOwned::to_owned)
        .collect()
}

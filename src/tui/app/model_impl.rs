//! `Model` trait implementation for the feedback console.
//!
//! Handles initialisation from startup storage, update dispatch, and view
//! normalisation to the terminal size.

use std::any::Any;

use bubbletea_rs::event::{KeyMsg, WindowSizeMsg};
use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{FeedbackApp, combine};
use crate::tui::messages::AppMsg;
use crate::tui::storage;

const ANSI_RESET: &str = "\x1b[0m";

impl Model for FeedbackApp {
    fn init() -> (Self, Option<Cmd>) {
        let (width, height) = storage::get_initial_terminal_size();
        let mut model = Self::new(storage::get_gateway(), storage::get_telemetry_sink())
            .with_size(width, height);

        // Mounting the dashboard on an admin start dispatches the first
        // refresh and arms the interval.
        let cmds = model.enter_route(storage::get_initial_route());
        (model, combine(cmds))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        let other = match msg.downcast::<AppMsg>() {
            Ok(app_msg) => return self.handle_message(*app_msg),
            Err(unhandled) => unhandled,
        };

        if let Some(key_msg) = other.downcast_ref::<KeyMsg>() {
            return self
                .map_key(key_msg)
                .and_then(|mapped| self.handle_message(mapped));
        }

        if let Some(size_msg) = other.downcast_ref::<WindowSizeMsg>() {
            return self.handle_message(AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        self.normalise_viewport(&self.render_frame())
    }
}

impl FeedbackApp {
    /// Pads or truncates every row to the terminal width and the frame to
    /// its height.
    ///
    /// Rows stop one column short of the width so the terminal never
    /// autowraps.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .take(height)
            .map(|line| fit_line(line, safe_width))
            .collect();
        let blank = " ".repeat(safe_width);
        lines.resize(height, blank);

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Fits one row to `width` visible cells, keeping escape sequences intact.
///
/// A row that used colour and got cut before its reset gets one appended.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::with_capacity(line.len().max(width));
    let mut visible = 0_usize;
    let mut chars = line.chars();
    let mut coloured = false;
    let mut reset_last = false;

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            coloured = true;
            let mut sequence = String::from(ch);
            for escaped in chars.by_ref() {
                sequence.push(escaped);
                if escaped.is_ascii_alphabetic() {
                    break;
                }
            }
            reset_last = sequence == ANSI_RESET;
            output.push_str(&sequence);
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(ch_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(ch_width);
    }

    if coloured && !reset_last {
        output.push_str(ANSI_RESET);
    }
    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    output
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::fit_line;
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[rstest]
    #[case::pads("abc", 6, "abc   ")]
    #[case::truncates("abcdefgh", 4, "abcd")]
    #[case::wide_chars("★★★★★", 3, "★★★")]
    fn plain_rows_fit_width(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_line(line, width), expected);
    }

    #[test]
    fn truncated_colour_is_reset() {
        let fitted = fit_line("\x1b[32mgreen text\x1b[0m", 5);

        assert_eq!(strip_ansi_codes(&fitted), "green");
        assert!(fitted.ends_with("\x1b[0m"));
    }

    #[test]
    fn wide_characters_never_overflow() {
        let fitted = fit_line("コーヒー", 5);
        assert!(UnicodeWidthStr::width(fitted.as_str()) <= 5);
    }
}

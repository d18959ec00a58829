//! Submissions table for the dashboard.
//!
//! One line per submission on the current page, newest first as the backend
//! returns them. The row under the cursor is marked with `>` and the window
//! scrolls to keep it visible. Wide terminals split the text area between
//! the review and the generated summary.

use crate::api::models::Submission;

use super::text::{pad_display, paint, truncate_display};

/// Context for rendering the submissions table.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionTableViewContext<'a> {
    /// Submissions on the current page.
    pub submissions: &'a [Submission],
    /// Cursor row (0-indexed).
    pub cursor_position: usize,
    /// Available width in columns.
    pub max_width: usize,
    /// Rows available for submissions, excluding the column header.
    pub visible_height: usize,
}

/// Component for the submissions table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionTableComponent;

/// Width of the fixed columns: marker, id, rating and date.
const FIXED_COLUMNS_WIDTH: usize = 2 + 7 + 9 + 18;

/// Narrowest text area that still gets a summary column.
const SUMMARY_MIN_TEXT_WIDTH: usize = 50;

/// Widths of the review column and, when it fits, the summary column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TextColumns {
    review: usize,
    summary: Option<usize>,
}

impl TextColumns {
    fn for_width(max_width: usize) -> Self {
        let text = max_width.saturating_sub(FIXED_COLUMNS_WIDTH).max(10);
        if text < SUMMARY_MIN_TEXT_WIDTH {
            return Self {
                review: text,
                summary: None,
            };
        }
        let summary = text.checked_div(2).unwrap_or_default();
        Self {
            review: text.saturating_sub(summary).saturating_sub(1),
            summary: Some(summary),
        }
    }
}

impl SubmissionTableComponent {
    /// Creates a new submissions table component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the table as a string.
    #[must_use]
    pub fn view(&self, ctx: &SubmissionTableViewContext<'_>) -> String {
        if ctx.submissions.is_empty() {
            return "  No submissions on this page.\n".to_owned();
        }

        let columns = TextColumns::for_width(ctx.max_width);
        let mut output = format!("  {:<6} {:<8} {:<17} ", "ID", "Rating", "Created");
        if columns.summary.is_some() {
            output.push_str(&pad_display("Review", columns.review));
            output.push_str(" Summary\n");
        } else {
            output.push_str("Review\n");
        }

        let height = ctx.visible_height.max(1);
        let start = scroll_start(ctx.cursor_position, height);

        for (index, submission) in ctx.submissions.iter().enumerate().skip(start).take(height) {
            let marker = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&format_row(submission, marker, columns));
            output.push('\n');
        }
        output
    }
}

/// Returns the first visible row so that `cursor` stays inside a window of
/// `height` rows.
const fn scroll_start(cursor: usize, height: usize) -> usize {
    if cursor < height {
        0
    } else {
        cursor.saturating_sub(height.saturating_sub(1))
    }
}

fn format_row(submission: &Submission, marker: &str, columns: TextColumns) -> String {
    let rating = submission.rating;
    let stars = paint(&format!("{rating}/5"), rating.class());
    let created = submission.created_at.format("%Y-%m-%d %H:%M").to_string();
    let text = match columns.summary {
        Some(summary_width) => format!(
            "{} {}",
            pad_display(&submission.review, columns.review),
            truncate_display(&submission.summary, summary_width)
        ),
        None => truncate_display(&submission.review, columns.review),
    };

    format!("{marker} #{:<5} {stars}      {created:<17} {text}", submission.id)
}

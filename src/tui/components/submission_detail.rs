//! Detail overlay for one submission.
//!
//! Shows every field of the selected submission: rating, timestamp, the
//! review as written, and the three generated fields.

use crate::api::models::Submission;

use super::feedback_form::render_stars;
use super::text::{paint, wrap_words};

const EMPTY_FIELD: &str = "(none)";

/// Context for rendering the detail overlay.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionDetailViewContext<'a> {
    /// Submission to show, if one is selected.
    pub selected: Option<&'a Submission>,
    /// Available width in columns.
    pub max_width: usize,
    /// Maximum height in lines (0 = unlimited).
    pub max_height: usize,
}

/// Component for the submission detail overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionDetailComponent;

impl SubmissionDetailComponent {
    /// Creates a new detail overlay component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the overlay, or nothing when no submission is selected.
    #[must_use]
    pub fn view(&self, ctx: &SubmissionDetailViewContext<'_>) -> String {
        let Some(submission) = ctx.selected else {
            return String::new();
        };
        let width = ctx.max_width.max(20);

        let mut lines = vec![
            "\u{2500}".repeat(width),
            format!("Submission #{}", submission.id),
            format!(
                "Rating: {} ({}/5)",
                paint(&render_stars(submission.rating.value()), submission.rating.class()),
                submission.rating
            ),
            format!(
                "Created: {}",
                submission.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        ];

        for (heading, body) in [
            ("Review", submission.review.as_str()),
            ("Summary", submission.summary.as_str()),
            ("Recommended actions", submission.recommended_actions.as_str()),
            ("Response", submission.response.as_str()),
        ] {
            lines.push(String::new());
            lines.push(format!("{heading}:"));
            push_section(&mut lines, body, width);
        }

        lines.push(String::new());
        lines.push("Esc: close".to_owned());

        if ctx.max_height > 0 {
            lines.truncate(ctx.max_height);
        }
        lines.iter().fold(String::new(), |mut output, line| {
            output.push_str(line);
            output.push('\n');
            output
        })
    }
}

fn push_section(lines: &mut Vec<String>, body: &str, width: usize) {
    if body.trim().is_empty() {
        lines.push(format!("  {EMPTY_FIELD}"));
        return;
    }
    lines.extend(
        wrap_words(body, width.saturating_sub(2))
            .into_iter()
            .map(|line| format!("  {line}")),
    );
}

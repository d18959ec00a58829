//! Rating and review form.
//!
//! Renders the star picker, the review text with its live character counter,
//! and one status line reflecting the submission phase.

use crate::api::models::{MAX_RATING, RatingClass};
use crate::tui::state::{SubmissionFlow, SubmissionPhase};

use super::text::{paint, wrap_words};

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';
const REVIEW_PLACEHOLDER: &str = "(start typing to write your review)";
const CURSOR: char = '▏';

/// Context for rendering the feedback form.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackFormViewContext<'a> {
    /// Form state to render.
    pub flow: &'a SubmissionFlow,
    /// Available width in columns.
    pub max_width: usize,
    /// Rows available for the review text (0 = unlimited).
    pub review_height: usize,
}

/// Component for the feedback form.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackFormComponent;

impl FeedbackFormComponent {
    /// Creates a new feedback form component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the form as a string.
    #[must_use]
    pub fn view(&self, ctx: &FeedbackFormViewContext<'_>) -> String {
        let draft = ctx.flow.draft();
        let mut output = String::new();

        output.push_str(&format!(
            "Rating: {}  ({}/{MAX_RATING})\n\n",
            render_stars(draft.rating().value()),
            draft.rating()
        ));

        output.push_str("Review:\n");
        output.push_str(&Self::render_review(
            draft.review(),
            ctx.max_width,
            ctx.review_height,
            !ctx.flow.is_submitting(),
        ));
        let counter_width = ctx.max_width.min(40);
        output.push_str(&format!(
            "{:>counter_width$}\n\n",
            draft.counter_label()
        ));

        output.push_str(&render_phase(ctx.flow.phase(), ctx.max_width));
        output
    }

    fn render_review(review: &str, width: usize, height: usize, editable: bool) -> String {
        if review.is_empty() {
            return format!("  {REVIEW_PLACEHOLDER}\n");
        }

        let inner_width = width.saturating_sub(2);
        let mut lines = wrap_words(review, inner_width);
        if height > 0 && lines.len() > height {
            // Keep the tail in view; that is where typing happens.
            let hidden = lines.len().saturating_sub(height);
            lines.drain(..hidden);
        }
        if editable && let Some(last) = lines.last_mut() {
            last.push(CURSOR);
        }

        lines.iter().fold(String::new(), |mut output, line| {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
            output
        })
    }
}

/// Renders `filled` filled stars followed by empty ones, five in total.
#[must_use]
pub(crate) fn render_stars(filled: u8) -> String {
    (1..=MAX_RATING)
        .map(|position| {
            if position <= filled {
                FILLED_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

fn render_phase(phase: &SubmissionPhase, width: usize) -> String {
    match phase {
        SubmissionPhase::Idle => "Press Enter to submit.\n".to_owned(),
        SubmissionPhase::Submitting => "Submitting...\n".to_owned(),
        SubmissionPhase::Success { response } => {
            let mut output = paint("Thank you for your feedback!", RatingClass::Positive);
            output.push('\n');
            for line in wrap_words(response, width) {
                output.push_str(&line);
                output.push('\n');
            }
            output
        }
        SubmissionPhase::Error { message } => {
            format!("{}\n", paint(&format!("Error: {message}"), RatingClass::Negative))
        }
    }
}

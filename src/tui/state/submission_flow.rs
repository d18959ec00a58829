//! Submission flow state for the feedback form.
//!
//! The flow owns the unsent draft and the observable phase of the form. It
//! performs no I/O: [`SubmissionFlow::submit`] validates the draft and hands
//! back the request to send, and the caller reports the outcome through
//! [`SubmissionFlow::complete`]. A successful submission returns a *reset
//! generation*; the caller schedules a reset carrying it, and
//! [`SubmissionFlow::reset`] ignores any generation that is no longer current.

use std::time::Duration;

use thiserror::Error;

use crate::api::error::ApiError;
use crate::api::models::{NewReview, Rating, SubmitReceipt};

/// Maximum review length in Unicode scalar values.
pub const MAX_REVIEW_CHARS: usize = 5000;

/// How long the success message stays up before the form returns to idle.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

/// Message shown when a submission fails without a server detail.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to submit review";

/// Local validation failures. These never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The review is empty or whitespace-only.
    #[error("Please enter a review")]
    EmptyReview,
    /// The review exceeds [`MAX_REVIEW_CHARS`].
    #[error("Review must be less than 5000 characters")]
    ReviewTooLong {
        /// Length of the rejected review.
        length: usize,
    },
}

/// Unsent rating and review pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    rating: Rating,
    review: String,
}

impl ReviewDraft {
    /// Creates a draft with the default five-star rating and empty review.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the draft rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the draft review text.
    #[must_use]
    pub const fn review(&self) -> &str {
        self.review.as_str()
    }

    /// Returns the review length in Unicode scalar values.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.review.chars().count()
    }

    /// Returns the counter label, such as `14/5000`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{MAX_REVIEW_CHARS}", self.char_count())
    }

    /// Sets the rating.
    pub const fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Replaces the review text as-is, without enforcing the cap.
    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
    }

    /// Appends a typed character. Input stops at [`MAX_REVIEW_CHARS`].
    ///
    /// Returns whether the character was appended.
    pub fn push_char(&mut self, character: char) -> bool {
        if self.char_count() >= MAX_REVIEW_CHARS {
            return false;
        }
        self.review.push(character);
        true
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        let _removed = self.review.pop();
    }

    /// Clears the review text, keeping the rating.
    pub fn clear_review(&mut self) {
        self.review.clear();
    }

    /// Validates the draft and builds the request body.
    ///
    /// The review is sent as typed; only the emptiness check trims.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyReview`] for blank reviews and
    /// [`ValidationError::ReviewTooLong`] above [`MAX_REVIEW_CHARS`].
    pub fn validate(&self) -> Result<NewReview, ValidationError> {
        if self.review.trim().is_empty() {
            return Err(ValidationError::EmptyReview);
        }

        let length = self.char_count();
        if length > MAX_REVIEW_CHARS {
            return Err(ValidationError::ReviewTooLong { length });
        }

        Ok(NewReview {
            rating: self.rating,
            review: self.review.clone(),
        })
    }
}

/// Observable phase of the feedback form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// A submit request is in flight.
    Submitting,
    /// The backend accepted the review.
    Success {
        /// Generated reply to show.
        response: String,
    },
    /// Validation or the request failed.
    Error {
        /// Message shown inline.
        message: String,
    },
}

/// What the caller must do after [`SubmissionFlow::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Send this request.
    Dispatch(NewReview),
    /// Validation failed; nothing to send.
    Rejected(ValidationError),
    /// A submission is already in flight; nothing to send.
    Busy,
}

/// Rating and review form state machine.
///
/// # Examples
///
/// ```
/// use feedback_console::api::SubmitReceipt;
/// use feedback_console::tui::state::{SubmissionFlow, SubmissionPhase, SubmitOutcome};
///
/// let mut flow = SubmissionFlow::new();
/// flow.set_review("Great service!");
/// assert!(matches!(flow.submit(), SubmitOutcome::Dispatch(_)));
/// assert_eq!(flow.phase(), &SubmissionPhase::Submitting);
///
/// let receipt = SubmitReceipt { id: Some(1), response: "Thank you!".to_owned() };
/// let generation = flow.complete(Ok(receipt));
/// assert!(flow.draft().review().is_empty());
/// assert!(flow.reset(generation.expect("success schedules a reset")));
/// assert_eq!(flow.phase(), &SubmissionPhase::Idle);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    draft: ReviewDraft,
    phase: SubmissionPhase,
    reset_generation: u64,
}

impl SubmissionFlow {
    /// Creates an idle flow with a five-star, empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Returns the draft.
    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Returns true while a submit request is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    /// Returns the generation a pending reset must carry to take effect.
    #[must_use]
    pub const fn reset_generation(&self) -> u64 {
        self.reset_generation
    }

    /// Sets the rating unless a submission is in flight.
    pub const fn set_rating(&mut self, rating: Rating) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft.set_rating(rating);
        true
    }

    /// Raises the rating by one star, up to five.
    pub const fn increase_rating(&mut self) -> bool {
        self.set_rating(self.draft.rating().increment())
    }

    /// Lowers the rating by one star, down to one.
    pub const fn decrease_rating(&mut self) -> bool {
        self.set_rating(self.draft.rating().decrement())
    }

    /// Replaces the review text unless a submission is in flight.
    pub fn set_review(&mut self, review: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft.set_review(review);
        true
    }

    /// Appends a typed character unless a submission is in flight.
    pub fn push_char(&mut self, character: char) -> bool {
        !self.is_submitting() && self.draft.push_char(character)
    }

    /// Deletes the last character unless a submission is in flight.
    pub fn backspace(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft.backspace();
        true
    }

    /// Validates the draft and, if valid, moves to [`SubmissionPhase::Submitting`].
    ///
    /// Starting a submission advances the reset generation, so a reset
    /// scheduled by an earlier success no longer applies.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Busy;
        }

        match self.draft.validate() {
            Ok(request) => {
                self.phase = SubmissionPhase::Submitting;
                self.reset_generation = self.reset_generation.wrapping_add(1);
                SubmitOutcome::Dispatch(request)
            }
            Err(error) => {
                self.phase = SubmissionPhase::Error {
                    message: error.to_string(),
                };
                SubmitOutcome::Rejected(error)
            }
        }
    }

    /// Applies the result of the in-flight submission.
    ///
    /// Returns the reset generation to schedule on success. Results arriving
    /// when nothing is in flight are ignored.
    pub fn complete(&mut self, result: Result<SubmitReceipt, ApiError>) -> Option<u64> {
        if !self.is_submitting() {
            tracing::debug!("ignoring submit result with no submission in flight");
            return None;
        }

        match result {
            Ok(receipt) => {
                tracing::debug!(id = ?receipt.id, "review submitted");
                self.phase = SubmissionPhase::Success {
                    response: receipt.response,
                };
                self.draft.clear_review();
                Some(self.reset_generation)
            }
            Err(error) => {
                tracing::debug!(%error, "review submission failed");
                self.phase = SubmissionPhase::Error {
                    message: error.user_message(SUBMIT_FALLBACK_MESSAGE),
                };
                None
            }
        }
    }

    /// Returns to idle if `generation` is current and the success message is
    /// still showing.
    pub fn reset(&mut self, generation: u64) -> bool {
        if generation != self.reset_generation
            || !matches!(self.phase, SubmissionPhase::Success { .. })
        {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        true
    }
}

#[cfg(test)]
#[path = "submission_flow_tests.rs"]
mod tests;

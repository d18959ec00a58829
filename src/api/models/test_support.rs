//! Test helpers for constructing submission fixtures.
//!
//! # Examples
//!
//! ```
//! use feedback_console::api::models::test_support::{minimal_submission, submissions_with_ids};
//!
//! let submission = minimal_submission(1, 4, "Lovely coffee");
//! assert_eq!(submission.rating.value(), 4);
//!
//! let newest_first = submissions_with_ids((1..=3).rev());
//! assert_eq!(newest_first.first().map(|s| s.id), Some(3));
//! ```

use chrono::{DateTime, TimeZone, Utc};

use super::{Rating, Submission};

/// Fixed creation time used by fixtures.
#[must_use]
pub fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Constructs a submission with the given id, rating and review.
///
/// Out-of-range ratings fall back to five stars. Generated fields are filled
/// with short placeholders derived from the id.
#[must_use]
pub fn minimal_submission(id: u64, rating: u8, review: &str) -> Submission {
    Submission {
        id,
        rating: Rating::new(rating).unwrap_or_default(),
        review: review.to_owned(),
        summary: format!("Summary {id}"),
        recommended_actions: format!("Action {id}"),
        response: format!("Response {id}"),
        created_at: fixture_time(),
    }
}

/// Creates a submission with a default five-star review for `id`.
#[must_use]
pub fn submission_with_id(id: u64) -> Submission {
    minimal_submission(id, 5, &format!("Review {id}"))
}

/// Creates submissions for every id yielded by `ids`, in iteration order.
#[must_use]
pub fn submissions_with_ids(ids: impl IntoIterator<Item = u64>) -> Vec<Submission> {
    ids.into_iter().map(submission_with_id).collect()
}

//! Data models exchanged with the feedback backend.
//!
//! Field names follow the backend's JSON contract through serde renames, so
//! the public Rust names describe the domain (`rating`, `review`) while the
//! wire keys stay `user_rating`, `user_review` and friends.

mod rating;
mod statistics;
mod submission;
pub mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use rating::{MAX_RATING, MIN_RATING, Rating, RatingClass, RatingError};
pub use statistics::Statistics;
pub use submission::{NewReview, Submission, SubmissionPage, SubmitReceipt};

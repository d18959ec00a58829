//! Client-side contract for the feedback backend.
//!
//! The backend is an opaque HTTP+JSON service exposing four operations:
//! submit a review, list submissions, fetch one submission, and fetch
//! aggregate statistics. [`FeedbackGateway`] is the seam the rest of the crate
//! talks to; [`HttpFeedbackGateway`] implements it over `reqwest`.

pub mod error;
pub mod gateway;
pub mod models;
pub mod pagination;

use async_trait::async_trait;

pub use error::ApiError;
#[cfg(any(test, feature = "test-support"))]
pub use gateway::InMemoryFeedbackGateway;
pub use gateway::{HttpFeedbackGateway, UnconfiguredGateway};
pub use models::{
    MAX_RATING, MIN_RATING, NewReview, Rating, RatingClass, RatingError, Statistics, Submission,
    SubmissionPage, SubmitReceipt,
};
pub use pagination::{ListSubmissionsParams, PAGE_SIZE, PageInfo};

/// Gateway that can talk to the feedback backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackGateway: Send + Sync {
    /// Submit a rating and review, returning the generated reply.
    async fn submit_review(&self, review: &NewReview) -> Result<SubmitReceipt, ApiError>;

    /// Fetch one window of submissions.
    async fn list_submissions(
        &self,
        params: &ListSubmissionsParams,
    ) -> Result<SubmissionPage, ApiError>;

    /// Fetch a single submission by identifier.
    async fn submission(&self, id: u64) -> Result<Submission, ApiError>;

    /// Fetch aggregate statistics over all submissions.
    async fn statistics(&self) -> Result<Statistics, ApiError>;
}

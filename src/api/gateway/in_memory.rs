//! In-memory feedback backend for tests and offline demos.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::api::FeedbackGateway;
use crate::api::error::ApiError;
use crate::api::models::{
    NewReview, RatingClass, Statistics, Submission, SubmissionPage, SubmitReceipt,
};
use crate::api::pagination::ListSubmissionsParams;

const MAX_REVIEW_CHARS: usize = 5000;
const MIN_REVIEW_CHARS: usize = 10;

/// Gateway that stores submissions in memory.
///
/// It mirrors the backend's observable behaviour: identifiers increase with
/// each accepted submission, listings are newest first, statistics are
/// recomputed on every request, and reviews outside 10..5000 characters are
/// rejected with the backend's messages. Failures can be queued per
/// operation to script error paths.
#[derive(Debug)]
pub struct InMemoryFeedbackGateway {
    store: Mutex<Store>,
    reply: String,
    submit_calls: AtomicUsize,
    list_calls: AtomicUsize,
    stats_calls: AtomicUsize,
}

#[derive(Debug, Default)]
struct Store {
    submissions: Vec<Submission>,
    next_id: u64,
    submit_failures: VecDeque<ApiError>,
    list_failures: VecDeque<ApiError>,
    stats_failures: VecDeque<ApiError>,
}

impl Default for InMemoryFeedbackGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFeedbackGateway {
    /// Creates an empty store replying "Thank you!" to every submission.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reply("Thank you!")
    }

    /// Creates an empty store replying `reply` to every submission.
    #[must_use]
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                ..Store::default()
            }),
            reply: reply.into(),
            submit_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            stats_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a store pre-populated with `submissions`.
    ///
    /// New identifiers continue after the largest seeded one.
    #[must_use]
    pub fn seeded(submissions: Vec<Submission>) -> Self {
        let gateway = Self::new();
        if let Ok(mut store) = gateway.store.lock() {
            store.next_id = submissions
                .iter()
                .map(|submission| submission.id)
                .max()
                .map_or(1, |max| max.saturating_add(1));
            store.submissions = submissions;
        }
        gateway
    }

    /// Queues an error returned by the next submit request.
    pub fn fail_next_submit(&self, error: ApiError) {
        if let Ok(mut store) = self.store.lock() {
            store.submit_failures.push_back(error);
        }
    }

    /// Queues an error returned by the next list request.
    pub fn fail_next_list(&self, error: ApiError) {
        if let Ok(mut store) = self.store.lock() {
            store.list_failures.push_back(error);
        }
    }

    /// Queues an error returned by the next statistics request.
    pub fn fail_next_stats(&self, error: ApiError) {
        if let Ok(mut store) = self.store.lock() {
            store.stats_failures.push_back(error);
        }
    }

    /// Number of submit requests received.
    #[must_use]
    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    /// Number of list requests received.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of statistics requests received.
    #[must_use]
    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    /// Number of stored submissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().map_or(0, |store| store.submissions.len())
    }

    /// Returns true when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Store>, ApiError> {
        self.store.lock().map_err(|_| ApiError::Io {
            message: "in-memory store lock poisoned".to_owned(),
        })
    }
}

fn validate_review(review: &str) -> Result<(), ApiError> {
    let length = review.trim().chars().count();
    let detail = if length < MIN_REVIEW_CHARS {
        "Review must be at least 10 characters"
    } else if length > MAX_REVIEW_CHARS {
        "Review must be less than 5000 characters"
    } else {
        return Ok(());
    };
    Err(ApiError::Request {
        status: 400,
        detail: Some(detail.to_owned()),
    })
}

fn matches_filter(submission: &Submission, filter: Option<&str>) -> bool {
    let wanted = match filter {
        Some("positive") => RatingClass::Positive,
        Some("neutral") => RatingClass::Neutral,
        Some("negative") => RatingClass::Negative,
        _ => return true,
    };
    submission.rating.class() == wanted
}

#[expect(
    clippy::float_arithmetic,
    reason = "the average is rounded to two decimal places"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "submission counts stay far below 2^52"
)]
fn compute_statistics(submissions: &[Submission]) -> Statistics {
    let total = u64::try_from(submissions.len()).unwrap_or(u64::MAX);
    let mut distribution = BTreeMap::new();
    let mut sum = 0_u64;
    for submission in submissions {
        *distribution.entry(submission.rating).or_insert(0_u64) += 1;
        sum += u64::from(submission.rating.value());
    }
    let average_rating = if total == 0 {
        0.0
    } else {
        (sum as f64 / total as f64 * 100.0).round() / 100.0
    };

    Statistics {
        total_submissions: total,
        average_rating,
        rating_distribution: distribution,
    }
}

#[async_trait]
impl FeedbackGateway for InMemoryFeedbackGateway {
    async fn submit_review(&self, review: &NewReview) -> Result<SubmitReceipt, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let mut store = self.lock()?;
        if let Some(error) = store.submit_failures.pop_front() {
            return Err(error);
        }
        validate_review(&review.review)?;

        let id = store.next_id;
        store.next_id = id.saturating_add(1);
        store.submissions.push(Submission {
            id,
            rating: review.rating,
            review: review.review.trim().to_owned(),
            summary: String::new(),
            recommended_actions: String::new(),
            response: self.reply.clone(),
            created_at: Utc::now(),
        });

        Ok(SubmitReceipt {
            id: Some(id),
            response: self.reply.clone(),
        })
    }

    async fn list_submissions(
        &self,
        params: &ListSubmissionsParams,
    ) -> Result<SubmissionPage, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut store = self.lock()?;
        if let Some(error) = store.list_failures.pop_front() {
            return Err(error);
        }

        let mut matching: Vec<&Submission> = store
            .submissions
            .iter()
            .filter(|submission| matches_filter(submission, params.filter.as_deref()))
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let items = matching
            .into_iter()
            .skip(usize::try_from(params.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(params.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(SubmissionPage {
            items,
            total: Some(total),
        })
    }

    async fn submission(&self, id: u64) -> Result<Submission, ApiError> {
        let store = self.lock()?;
        store
            .submissions
            .iter()
            .find(|submission| submission.id == id)
            .cloned()
            .ok_or(ApiError::NotFound { id })
    }

    async fn statistics(&self) -> Result<Statistics, ApiError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        let mut store = self.lock()?;
        if let Some(error) = store.stats_failures.pop_front() {
            return Err(error);
        }
        Ok(compute_statistics(&store.submissions))
    }
}

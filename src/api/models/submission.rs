//! Submission records and the request/response shapes around them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::rating::Rating;

/// One user-provided feedback record plus server-generated analysis.
///
/// Submissions are created by the backend and never mutated by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Server-assigned identifier, increasing with creation order.
    pub id: u64,
    /// Star rating given by the user.
    #[serde(rename = "user_rating")]
    pub rating: Rating,
    /// Free-text review written by the user.
    #[serde(rename = "user_review")]
    pub review: String,
    /// Server-generated summary of the review.
    #[serde(rename = "ai_summary", default)]
    pub summary: String,
    /// Server-generated follow-up actions.
    #[serde(default)]
    pub recommended_actions: String,
    /// Server-generated reply shown to the user.
    #[serde(rename = "ai_response", default)]
    pub response: String,
    /// Creation time reported by the backend.
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Body of a submit-review request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    /// Rating chosen in the draft.
    #[serde(rename = "user_rating")]
    pub rating: Rating,
    /// Review text from the draft, sent as typed.
    #[serde(rename = "user_review")]
    pub review: String,
}

/// Successful result of a submit-review request.
///
/// The backend echoes the full stored submission; only the generated reply
/// and the identifier are needed by the client, so other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitReceipt {
    /// Identifier of the stored submission, when reported.
    #[serde(default)]
    pub id: Option<u64>,
    /// Generated reply to show to the user.
    #[serde(rename = "ai_response", alias = "response")]
    pub response: String,
}

/// One window of submissions as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SubmissionPage {
    /// Submissions in server order.
    #[serde(rename = "submissions", alias = "items", default)]
    pub items: Vec<Submission>,
    /// Total number of submissions, when the backend reports it.
    #[serde(default)]
    pub total: Option<u64>,
}

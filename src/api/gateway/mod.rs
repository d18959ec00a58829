//! Gateway implementations for the feedback backend.

mod error_mapping;
#[cfg(any(test, feature = "test-support"))]
mod in_memory;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::FeedbackGateway;
use super::error::ApiError;
use super::models::{NewReview, Statistics, Submission, SubmissionPage, SubmitReceipt};
use super::pagination::ListSubmissionsParams;
use error_mapping::{map_status_error, map_transport_error};
#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryFeedbackGateway;

/// Default timeout applied to every backend request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway that talks to the feedback backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFeedbackGateway {
    client: Client,
    base_url: Url,
}

impl HttpFeedbackGateway {
    /// Creates a gateway rooted at `base_url`.
    ///
    /// A base URL with a path prefix (for example `https://host/api`) keeps
    /// that prefix for every endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the base URL cannot be parsed
    /// or is not HTTP(S), and when the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let root = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to build HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: root,
        })
    }

    /// Returns the normalised base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, relative: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(relative)
            .map_err(|error| ApiError::Configuration {
                message: format!("invalid endpoint `{relative}`: {error}"),
            })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let raw = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        ensure_success(raw)
            .await?
            .json::<T>()
            .await
            .map_err(|error| ApiError::Decode {
                message: format!("{operation}: {error}"),
            })
    }
}

#[async_trait]
impl FeedbackGateway for HttpFeedbackGateway {
    async fn submit_review(&self, review: &NewReview) -> Result<SubmitReceipt, ApiError> {
        let url = self.endpoint("submit")?;
        tracing::debug!(%url, rating = review.rating.value(), "submitting review");
        self.send_json("submit review", self.client.post(url).json(review))
            .await
    }

    async fn list_submissions(
        &self,
        params: &ListSubmissionsParams,
    ) -> Result<SubmissionPage, ApiError> {
        let url = self.endpoint("submissions")?;
        let mut query = vec![
            ("limit", params.limit.to_string()),
            ("offset", params.offset.to_string()),
        ];
        if let Some(filter) = &params.filter {
            query.push(("filter", filter.clone()));
        }
        tracing::debug!(%url, limit = params.limit, offset = params.offset, "listing submissions");
        self.send_json("list submissions", self.client.get(url).query(&query))
            .await
    }

    async fn submission(&self, id: u64) -> Result<Submission, ApiError> {
        let url = self.endpoint(&format!("submissions/{id}"))?;
        let result = self
            .send_json::<Submission>("fetch submission", self.client.get(url))
            .await;
        match result {
            Err(ApiError::Request { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ApiError::NotFound { id })
            }
            other => other,
        }
    }

    async fn statistics(&self) -> Result<Statistics, ApiError> {
        let url = self.endpoint("stats")?;
        self.send_json("fetch statistics", self.client.get(url))
            .await
    }
}

/// Gateway used when no backend has been configured.
///
/// Every operation fails with [`ApiError::Configuration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredGateway;

impl UnconfiguredGateway {
    fn error() -> ApiError {
        ApiError::Configuration {
            message: "no feedback backend configured".to_owned(),
        }
    }
}

#[async_trait]
impl FeedbackGateway for UnconfiguredGateway {
    async fn submit_review(&self, _review: &NewReview) -> Result<SubmitReceipt, ApiError> {
        Err(Self::error())
    }

    async fn list_submissions(
        &self,
        _params: &ListSubmissionsParams,
    ) -> Result<SubmissionPage, ApiError> {
        Err(Self::error())
    }

    async fn submission(&self, _id: u64) -> Result<Submission, ApiError> {
        Err(Self::error())
    }

    async fn statistics(&self) -> Result<Statistics, ApiError> {
        Err(Self::error())
    }
}

/// Parses and normalises a backend base URL.
///
/// The path always ends in `/` so relative endpoints join beneath it.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] for unparseable or non-HTTP(S) URLs.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim()).map_err(|error| ApiError::Configuration {
        message: format!("invalid API URL `{raw}`: {error}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Configuration {
            message: format!("API URL `{raw}` must use http or https"),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "feedback API request rejected");
    Err(map_status_error(status, &body))
}

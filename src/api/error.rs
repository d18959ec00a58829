//! Error types exposed by the feedback API layer.

use thiserror::Error;

/// Errors surfaced while talking to the feedback backend or loading
/// configuration for it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("feedback API returned status {status}{}", detail_suffix(detail.as_deref()))]
    Request {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Human-readable `detail` extracted from the error body, if any.
        detail: Option<String>,
    },

    /// The requested submission does not exist.
    #[error("submission {id} was not found")]
    NotFound {
        /// Identifier that was requested.
        id: u64,
    },

    /// Networking failed before a response was received.
    #[error("network error talking to the feedback API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("feedback API response could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ApiError {
    /// Returns the server-reported detail message, if the error carries one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Request { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Returns the message shown to a user for this failure.
    ///
    /// The backend's `detail` wins when present and non-blank; every other
    /// failure collapses to `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedback_console::ApiError;
    ///
    /// let rejected = ApiError::Request { status: 400, detail: Some("too long".to_owned()) };
    /// assert_eq!(rejected.user_message("Failed to submit review"), "too long");
    ///
    /// let offline = ApiError::Network { message: "refused".to_owned() };
    /// assert_eq!(offline.user_message("Failed to submit review"), "Failed to submit review");
    /// ```
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::trim)
            .filter(|detail| !detail.is_empty())
            .unwrap_or(fallback)
            .to_owned()
    }
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map_or_else(String::new, |text| format!(": {text}"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ApiError;

    const FALLBACK: &str = "Failed to submit review";

    #[rstest]
    #[case::detail_present(ApiError::Request { status: 400, detail: Some("too long".to_owned()) }, "too long")]
    #[case::detail_absent(ApiError::Request { status: 500, detail: None }, FALLBACK)]
    #[case::detail_blank(ApiError::Request { status: 422, detail: Some("   ".to_owned()) }, FALLBACK)]
    #[case::network(ApiError::Network { message: "connection refused".to_owned() }, FALLBACK)]
    #[case::decode(ApiError::Decode { message: "eof".to_owned() }, FALLBACK)]
    fn user_message_prefers_detail_then_fallback(#[case] error: ApiError, #[case] expected: &str) {
        assert_eq!(error.user_message(FALLBACK), expected);
    }

    #[test]
    fn request_error_display_includes_detail_when_present() {
        let error = ApiError::Request {
            status: 400,
            detail: Some("Rating must be between 1 and 5".to_owned()),
        };

        assert_eq!(
            error.to_string(),
            "feedback API returned status 400: Rating must be between 1 and 5"
        );
    }

    #[test]
    fn request_error_display_omits_missing_detail() {
        let error = ApiError::Request {
            status: 503,
            detail: None,
        };

        assert_eq!(error.to_string(), "feedback API returned status 503");
    }
}

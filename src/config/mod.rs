//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.feedback-console.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `FEEDBACK_API_URL`, `FEEDBACK_VIEW`, ...
//! 4. **Command-line arguments** – `--api-url`/`-u`, `--view`/`-v`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://feedback.example.com/api"
//! view = "#/admin"
//! request_timeout_seconds = 10
//! log_file = "feedback-console.log"
//! ```

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::gateway::parse_base_url;
use crate::api::models::Rating;
use crate::tui::Route;

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default route fragment, selecting the feedback form.
pub const DEFAULT_VIEW: &str = "#/";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print one submission and exit.
    ShowSubmission,
    /// Print aggregate statistics and exit.
    StatisticsSummary,
    /// Submit a single review without the TUI.
    SubmitOnce,
    /// Interactive TUI with the feedback form and dashboard.
    Interactive,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use feedback_console::FeedbackConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FeedbackConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FEEDBACK",
    discovery(
        dotfile_name = ".feedback-console.toml",
        config_file_name = "feedback-console.toml",
        app_name = "feedback-console"
    )
)]
pub struct FeedbackConfig {
    /// Base URL of the feedback backend.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `FEEDBACK_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: String,

    /// Route fragment selecting the initial view.
    ///
    /// `#/admin` opens the monitoring dashboard; anything else opens the
    /// feedback form.
    #[ortho_config(cli_short = 'v')]
    pub view: String,

    /// HTTP client timeout for backend requests, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Prints the submission with this identifier and exits.
    #[ortho_config(cli_short = 'i')]
    pub submission_id: Option<u64>,

    /// Prints aggregate statistics and exits.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so use the CLI flag or the config file.
    #[ortho_config(cli_short = 's')]
    pub stats: bool,

    /// Rating for a non-interactive submission. Defaults to five stars.
    #[ortho_config()]
    pub rating: Option<u8>,

    /// Review text; when set, the review is submitted once and the generated
    /// reply printed.
    #[ortho_config()]
    pub review: Option<String>,

    /// Writes `tracing` output to this file.
    #[ortho_config()]
    pub log_file: Option<Utf8PathBuf>,

    /// Emits telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            view: DEFAULT_VIEW.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            submission_id: None,
            stats: false,
            rating: None,
            review: None,
            log_file: None,
            telemetry: false,
        }
    }
}

impl FeedbackConfig {
    /// Determines the operation mode based on provided configuration.
    ///
    /// A submission id wins over `stats`, which wins over a one-shot
    /// `review`; with none of them the interactive TUI runs.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.submission_id.is_some() {
            OperationMode::ShowSubmission
        } else if self.stats {
            OperationMode::StatisticsSummary
        } else if self.review.is_some() {
            OperationMode::SubmitOnce
        } else {
            OperationMode::Interactive
        }
    }

    /// Returns the initial route selected by `view`.
    #[must_use]
    pub fn route(&self) -> Route {
        Route::from_fragment(&self.view)
    }

    /// Returns the HTTP client timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the rating for a one-shot submission.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the configured rating is
    /// outside 1..=5.
    pub fn resolve_rating(&self) -> Result<Rating, ApiError> {
        self.rating.map_or(Ok(Rating::default()), |value| {
            Rating::new(value).map_err(|error| ApiError::Configuration {
                message: format!("{error} (use --rating 1..5)"),
            })
        })
    }

    /// Returns the one-shot review text or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when no review is configured.
    pub fn require_review(&self) -> Result<&str, ApiError> {
        self.review
            .as_deref()
            .ok_or_else(|| ApiError::Configuration {
                message: "review text is required (use --review)".to_owned(),
            })
    }

    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the API URL is not an
    /// HTTP(S) URL, the timeout is zero, or the rating is out of range.
    pub fn validate(&self) -> Result<(), ApiError> {
        parse_base_url(&self.api_url)?;

        if self.request_timeout_seconds == 0 {
            return Err(ApiError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }

        self.resolve_rating().map(|_| ())
    }
}

#[cfg(test)]
mod tests;

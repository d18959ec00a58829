//! Prints one submission and exits.

use std::io;

use feedback_console::{ApiError, FeedbackConfig, FeedbackGateway};

use super::output::write_submission_to;

/// Fetches the configured submission and prints it.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when no id is configured,
/// [`ApiError::NotFound`] for an unknown id, and the gateway's error for
/// any other failure.
pub async fn run(config: &FeedbackConfig, gateway: &dyn FeedbackGateway) -> Result<(), ApiError> {
    let id = config.submission_id.ok_or_else(|| ApiError::Configuration {
        message: "submission id is required (use --submission-id)".to_owned(),
    })?;

    let submission = gateway.submission(id).await?;
    write_submission_to(&mut io::stdout().lock(), &submission)
}

//! Submits a single review from configuration and prints the reply.

use std::io;

use feedback_console::tui::state::ReviewDraft;
use feedback_console::{ApiError, FeedbackConfig, FeedbackGateway};

use super::output::write_receipt_to;

/// Validates the configured review the same way the form does, submits it
/// and prints the generated reply.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] for a missing, blank or overlong
/// review and the gateway's error when the submission fails.
pub async fn run(config: &FeedbackConfig, gateway: &dyn FeedbackGateway) -> Result<(), ApiError> {
    let mut draft = ReviewDraft::new();
    draft.set_rating(config.resolve_rating()?);
    draft.set_review(config.require_review()?);

    let request = draft.validate().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })?;
    let receipt = gateway.submit_review(&request).await?;
    write_receipt_to(&mut io::stdout().lock(), &receipt)
}

//! Prints aggregate statistics and exits.

use std::io;

use feedback_console::{ApiError, FeedbackGateway};

use super::output::write_statistics_to;

/// Fetches statistics and prints the total, average and distribution.
///
/// # Errors
///
/// Returns the gateway's error when the statistics cannot be fetched.
pub async fn run(gateway: &dyn FeedbackGateway) -> Result<(), ApiError> {
    let stats = gateway.statistics().await?;
    if !stats.is_consistent() {
        tracing::warn!(
            total = stats.total_submissions,
            "rating distribution does not add up to the total"
        );
    }
    write_statistics_to(&mut io::stdout().lock(), &stats)
}

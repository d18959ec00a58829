//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use feedback_console::ApiError;
use feedback_console::api::{Rating, Statistics, Submission, SubmitReceipt};

/// Writes one submission with its generated fields to the given writer.
pub fn write_submission_to<W: Write>(
    writer: &mut W,
    submission: &Submission,
) -> Result<(), ApiError> {
    writeln!(
        writer,
        "Submission #{} ({}/5, {})",
        submission.id,
        submission.rating,
        submission.rating.class().label()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Created: {}",
        submission.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| io_error(&e))?;

    for (label, text) in [
        ("Review", submission.review.as_str()),
        ("Summary", submission.summary.as_str()),
        ("Recommended actions", submission.recommended_actions.as_str()),
        ("Response", submission.response.as_str()),
    ] {
        let shown = if text.trim().is_empty() { "(none)" } else { text };
        writeln!(writer, "\n{label}:\n  {shown}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the total, average and per-rating counts to the given writer.
pub fn write_statistics_to<W: Write>(writer: &mut W, stats: &Statistics) -> Result<(), ApiError> {
    let average = stats
        .average()
        .map_or_else(|| "-".to_owned(), |value| format!("{value:.2}"));
    writeln!(writer, "Total submissions: {}", stats.total_submissions)
        .map_err(|e| io_error(&e))?;
    writeln!(writer, "Average rating: {average}").map_err(|e| io_error(&e))?;

    for rating in Rating::ALL.iter().rev() {
        writeln!(
            writer,
            "  {rating}★ {:>5} ({:.0}%)",
            stats.count(*rating),
            stats.bar_width_percent(*rating)
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the generated reply for an accepted submission.
pub fn write_receipt_to<W: Write>(
    writer: &mut W,
    receipt: &SubmitReceipt,
) -> Result<(), ApiError> {
    if let Some(id) = receipt.id {
        writeln!(writer, "Submitted as #{id}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "{}", receipt.response).map_err(|e| io_error(&e))
}

/// Converts an I/O error to an [`ApiError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use feedback_console::api::models::test_support::minimal_submission;
    use feedback_console::api::{Rating, Statistics, SubmitReceipt};

    use super::{write_receipt_to, write_statistics_to, write_submission_to};

    fn render(write: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer);
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn submission_lists_every_section() {
        let submission = minimal_submission(7, 2, "Cold coffee again");

        let output = render(|buffer| {
            write_submission_to(buffer, &submission).expect("should write submission");
        });

        assert!(
            output.contains("Submission #7 (2/5, negative)"),
            "missing heading: {output}"
        );
        assert!(
            output.contains("Created: 2025-03-01 09:30:00 UTC"),
            "missing timestamp: {output}"
        );
        assert!(output.contains("Review:\n  Cold coffee again"), "missing review: {output}");
        assert!(output.contains("Response:\n  Response 7"), "missing response: {output}");
    }

    #[test]
    fn blank_generated_fields_show_placeholder() {
        let mut submission = minimal_submission(1, 5, "Lovely");
        submission.summary = String::new();

        let output = render(|buffer| {
            write_submission_to(buffer, &submission).expect("should write submission");
        });

        assert!(output.contains("Summary:\n  (none)"), "missing placeholder: {output}");
    }

    #[test]
    fn statistics_list_ratings_highest_first() {
        let five = Rating::new(5).expect("rating should be valid");
        let stats = Statistics {
            total_submissions: 2,
            average_rating: 5.0,
            rating_distribution: [(five, 2)].into_iter().collect(),
        };

        let output = render(|buffer| {
            write_statistics_to(buffer, &stats).expect("should write statistics");
        });

        assert!(output.contains("Average rating: 5.00"), "missing average: {output}");
        let five_star = output.find("5★").expect("five-star line should be present");
        let one_star = output.find("1★").expect("one-star line should be present");
        assert!(five_star < one_star);
        assert!(output.contains("5★     2 (100%)"), "missing count: {output}");
    }

    #[test]
    fn empty_statistics_show_dash_for_average() {
        let output = render(|buffer| {
            write_statistics_to(buffer, &Statistics::default()).expect("should write statistics");
        });

        assert!(output.contains("Average rating: -"), "missing dash: {output}");
    }

    #[test]
    fn receipt_prints_id_and_reply() {
        let receipt = SubmitReceipt {
            id: Some(12),
            response: "Thank you!".to_owned(),
        };

        let output = render(|buffer| {
            write_receipt_to(buffer, &receipt).expect("should write receipt");
        });

        assert_eq!(output, "Submitted as #12\nThank you!\n");
    }
}

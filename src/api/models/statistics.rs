//! Aggregate statistics over all submissions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rating::Rating;

/// Derived aggregate over every stored submission.
///
/// Statistics are replaced wholesale on every fetch; nothing here is updated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of stored submissions.
    pub total_submissions: u64,
    /// Mean rating, `0` when there are no submissions.
    #[serde(default)]
    pub average_rating: f64,
    /// Count of submissions per rating. Missing keys count as zero.
    #[serde(default)]
    pub rating_distribution: BTreeMap<Rating, u64>,
}

impl Statistics {
    /// Returns the number of submissions with the given rating.
    #[must_use]
    pub fn count(&self, rating: Rating) -> u64 {
        self.rating_distribution.get(&rating).copied().unwrap_or(0)
    }

    /// Returns the mean rating, or `None` when there are no submissions.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.total_submissions > 0).then_some(self.average_rating)
    }

    /// Returns the width of the distribution bar for `rating`, in percent.
    ///
    /// The width is `count / total * 100`, and `0.0` when the total is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use feedback_console::api::{Rating, Statistics};
    ///
    /// let empty = Statistics::default();
    /// assert_eq!(empty.bar_width_percent(Rating::default()), 0.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "bar widths are fractional percentages"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "submission counts stay far below 2^52"
    )]
    pub fn bar_width_percent(&self, rating: Rating) -> f64 {
        if self.total_submissions == 0 {
            return 0.0;
        }
        self.count(rating) as f64 / self.total_submissions as f64 * 100.0
    }

    /// Returns whether the distribution adds up to the reported total.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let sum = self
            .rating_distribution
            .values()
            .fold(0_u64, |acc, count| acc.saturating_add(*count));
        sum == self.total_submissions
    }
}

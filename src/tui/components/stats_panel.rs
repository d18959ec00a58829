//! Statistics summary panel.
//!
//! Shows the submission total, the colour-classified average and one
//! distribution bar per rating, highest first.

use crate::api::models::{Rating, RatingClass, Statistics};

use super::text::paint;

/// Number of cells in a distribution bar.
pub const BAR_CELLS: u64 = 20;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Context for rendering the statistics panel.
#[derive(Debug, Clone, Copy)]
pub struct StatsPanelViewContext<'a> {
    /// Latest statistics, if any fetch has succeeded.
    pub stats: Option<&'a Statistics>,
}

/// Component for the statistics panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsPanelComponent;

impl StatsPanelComponent {
    /// Creates a new statistics panel component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the panel as a string.
    #[must_use]
    pub fn view(&self, ctx: &StatsPanelViewContext<'_>) -> String {
        let Some(stats) = ctx.stats else {
            return "Statistics: (not loaded)\n".to_owned();
        };

        let average = stats.average().map_or_else(
            || "-".to_owned(),
            |value| paint(&format!("{value:.2}"), RatingClass::classify(value)),
        );
        let mut output = format!(
            "Total submissions: {}   Average rating: {average}\n",
            stats.total_submissions
        );

        for rating in Rating::ALL.iter().rev() {
            output.push_str(&render_bar_line(stats, *rating));
            output.push('\n');
        }
        output
    }
}

fn render_bar_line(stats: &Statistics, rating: Rating) -> String {
    let count = stats.count(rating);
    let filled = bar_cells(count, stats.total_submissions);
    let bar: String = (0..BAR_CELLS)
        .map(|cell| if cell < filled { BAR_FILLED } else { BAR_EMPTY })
        .collect();

    format!(
        "{rating}★ {} {:>3.0}% ({count})",
        paint(&bar, rating.class()),
        stats.bar_width_percent(rating)
    )
}

/// Returns how many of the [`BAR_CELLS`] cells a bar fills.
///
/// Zero when `total` is zero.
#[must_use]
pub(crate) fn bar_cells(count: u64, total: u64) -> u64 {
    count
        .saturating_mul(BAR_CELLS)
        .checked_div(total)
        .unwrap_or(0)
        .min(BAR_CELLS)
}

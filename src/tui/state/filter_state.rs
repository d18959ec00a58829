//! Filter and cursor state for the submissions table.
//!
//! The filter is forwarded to the backend unchanged; the client never filters
//! rows itself. The cursor is retained across refreshes and clamped when a
//! page comes back shorter.

use crate::api::models::RatingClass;

/// Filter value sent with every list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionFilter {
    /// Show every submission.
    #[default]
    All,
    /// Show positive submissions only.
    Positive,
    /// Show neutral submissions only.
    Neutral,
    /// Show negative submissions only.
    Negative,
}

impl SubmissionFilter {
    /// Returns the query value forwarded to the backend.
    #[must_use]
    pub const fn as_query(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Returns a human-readable label for display in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }

    /// Returns the next filter in the cycle
    /// `all → positive → neutral → negative → all`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Positive,
            Self::Positive => Self::Neutral,
            Self::Neutral => Self::Negative,
            Self::Negative => Self::All,
        }
    }

    /// Returns the rating class this filter narrows to, if any.
    #[must_use]
    pub const fn rating_class(self) -> Option<RatingClass> {
        match self {
            Self::All => None,
            Self::Positive => Some(RatingClass::Positive),
            Self::Neutral => Some(RatingClass::Neutral),
            Self::Negative => Some(RatingClass::Negative),
        }
    }
}

/// Cursor position within the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Current cursor position (0-indexed).
    pub position: usize,
}

impl CursorState {
    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, cursor is set to 0. If cursor exceeds the list
    /// length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by one position if possible.
    pub const fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Moves the cursor down by one position within `count` rows.
    pub const fn down(&mut self, count: usize) {
        if self.position.saturating_add(1) < count {
            self.position = self.position.saturating_add(1);
        }
    }

    /// Moves the cursor to the first row.
    pub const fn home(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to the last of `count` rows.
    pub const fn end(&mut self, count: usize) {
        self.position = count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CursorState, SubmissionFilter};

    #[test]
    fn filter_cycle_visits_every_value_and_wraps() {
        let mut filter = SubmissionFilter::All;
        let mut seen = vec![filter.as_query()];
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter.as_query());
        }

        assert_eq!(seen, vec!["all", "positive", "neutral", "negative", "all"]);
    }

    #[rstest]
    #[case(10, 5, 4)]
    #[case(3, 10, 3)]
    #[case(5, 0, 0)]
    fn clamp_keeps_cursor_in_range(
        #[case] start: usize,
        #[case] count: usize,
        #[case] expected: usize,
    ) {
        let mut cursor = CursorState { position: start };
        cursor.clamp(count);
        assert_eq!(cursor.position, expected);
    }

    #[test]
    fn cursor_navigation_respects_bounds() {
        let mut cursor = CursorState::default();

        cursor.up();
        assert_eq!(cursor.position, 0);

        cursor.down(3);
        cursor.down(3);
        cursor.down(3);
        assert_eq!(cursor.position, 2);

        cursor.home();
        assert_eq!(cursor.position, 0);

        cursor.end(20);
        assert_eq!(cursor.position, 19);
    }

    #[test]
    fn down_on_empty_page_stays_at_zero() {
        let mut cursor = CursorState::default();
        cursor.down(0);
        assert_eq!(cursor.position, 0);
    }
}

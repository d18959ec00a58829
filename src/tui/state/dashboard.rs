//! Monitoring dashboard state.
//!
//! The dashboard holds one page of submissions and the latest statistics and
//! replaces both wholesale whenever a refresh settles. It performs no I/O:
//! [`Dashboard::begin_refresh`] hands back the request to issue and
//! [`Dashboard::apply_refresh`] takes the two independent results.
//!
//! Overlapping refreshes are not fenced. Every completion is applied in the
//! order it arrives, so the last refresh to resolve wins.

use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::models::{Statistics, Submission, SubmissionPage};
use crate::api::pagination::{ListSubmissionsParams, PageInfo};

use super::filter_state::{CursorState, SubmissionFilter};

/// Interval between automatic refreshes while the dashboard is mounted.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// What caused a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// The dashboard was mounted.
    Mount,
    /// The refresh interval elapsed.
    Interval,
    /// The user asked for a refresh.
    Manual,
    /// The page number changed.
    PageChanged,
    /// The filter changed.
    FilterChanged,
}

impl RefreshTrigger {
    /// Returns a short name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Interval => "interval",
            Self::Manual => "manual",
            Self::PageChanged => "page",
            Self::FilterChanged => "filter",
        }
    }
}

/// One refresh to dispatch: a list fetch and a statistics fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Dispatch sequence number, for logging and telemetry only.
    pub sequence: u64,
    /// Parameters for the list fetch.
    pub params: ListSubmissionsParams,
}

/// Results of both fetches of one refresh.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Sequence number of the refresh these results belong to.
    pub sequence: u64,
    /// Result of the list fetch.
    pub list: Result<SubmissionPage, ApiError>,
    /// Result of the statistics fetch.
    pub stats: Result<Statistics, ApiError>,
}

/// Admin-facing view over submissions and statistics.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    page: PageInfo,
    filter: SubmissionFilter,
    loading: bool,
    submissions: Vec<Submission>,
    reported_total: Option<u64>,
    stats: Option<Statistics>,
    selected: Option<Submission>,
    cursor: CursorState,
    dispatched: u64,
}

impl Dashboard {
    /// Creates a dashboard on page 1 with the `all` filter and no data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current page position.
    #[must_use]
    pub const fn page(&self) -> PageInfo {
        self.page
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> SubmissionFilter {
        self.filter
    }

    /// Returns true while a refresh is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the submissions on the current page.
    #[must_use]
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Returns the total reported by the last successful list fetch.
    #[must_use]
    pub const fn reported_total(&self) -> Option<u64> {
        self.reported_total
    }

    /// Returns the latest statistics, if any fetch has succeeded.
    #[must_use]
    pub const fn stats(&self) -> Option<&Statistics> {
        self.stats.as_ref()
    }

    /// Returns the submission shown in the detail overlay.
    #[must_use]
    pub const fn selected(&self) -> Option<&Submission> {
        self.selected.as_ref()
    }

    /// Returns the cursor row on the current page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor.position
    }

    /// Returns the number of refreshes dispatched so far.
    #[must_use]
    pub const fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Returns true when a previous page exists.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.page.has_prev()
    }

    /// Returns true when the current page is full.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page.has_next(self.submissions.len())
    }

    /// Marks a refresh as outstanding and returns what to fetch.
    ///
    /// Manual refreshes are ignored while loading; every other trigger
    /// always dispatches.
    pub fn begin_refresh(&mut self, trigger: RefreshTrigger) -> Option<RefreshRequest> {
        if trigger == RefreshTrigger::Manual && self.loading {
            tracing::debug!("manual refresh ignored while loading");
            return None;
        }

        self.loading = true;
        self.dispatched = self.dispatched.wrapping_add(1);
        tracing::debug!(
            sequence = self.dispatched,
            trigger = trigger.as_str(),
            page = self.page.current_page(),
            filter = self.filter.as_query(),
            "dashboard refresh dispatched"
        );

        Some(RefreshRequest {
            sequence: self.dispatched,
            params: self.page.list_params(self.filter.as_query()),
        })
    }

    /// Applies the results of one refresh.
    ///
    /// A failed fetch is logged and leaves its prior state untouched; the
    /// other fetch is still applied. Loading is cleared either way.
    pub fn apply_refresh(&mut self, outcome: RefreshOutcome) {
        let RefreshOutcome {
            sequence,
            list,
            stats,
        } = outcome;

        match list {
            Ok(page) => {
                self.submissions = page.items;
                self.reported_total = page.total;
                self.cursor.clamp(self.submissions.len());
            }
            Err(error) => {
                tracing::warn!(sequence, %error, "failed to fetch submissions");
            }
        }

        match stats {
            Ok(statistics) => self.stats = Some(statistics),
            Err(error) => {
                tracing::warn!(sequence, %error, "failed to fetch statistics");
            }
        }

        self.loading = false;
    }

    /// Moves to the next page when the current one is full.
    ///
    /// Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.page = self.page.next();
        true
    }

    /// Moves to the previous page unless on the first.
    ///
    /// Returns whether the page changed.
    pub const fn prev_page(&mut self) -> bool {
        if !self.has_prev_page() {
            return false;
        }
        self.page = self.page.prev();
        true
    }

    /// Advances the filter cycle. The page number is kept.
    pub const fn cycle_filter(&mut self) -> SubmissionFilter {
        self.filter = self.filter.next();
        self.filter
    }

    /// Moves the cursor up one row.
    pub const fn cursor_up(&mut self) {
        self.cursor.up();
    }

    /// Moves the cursor down one row.
    pub fn cursor_down(&mut self) {
        self.cursor.down(self.submissions.len());
    }

    /// Moves the cursor to the first row.
    pub const fn cursor_home(&mut self) {
        self.cursor.home();
    }

    /// Moves the cursor to the last row.
    pub fn cursor_end(&mut self) {
        self.cursor.end(self.submissions.len());
    }

    /// Opens the detail overlay for the row under the cursor.
    ///
    /// Returns whether a submission was selected.
    pub fn open_selected(&mut self) -> bool {
        self.selected = self.submissions.get(self.cursor.position).cloned();
        self.selected.is_some()
    }

    /// Closes the detail overlay.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;

//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and timer
//! callbacks. Results carry the identifiers needed to discard them once
//! they no longer apply (an unmounted dashboard, a superseded timer).

use crate::api::error::ApiError;
use crate::api::models::SubmitReceipt;

use super::state::RefreshOutcome;

/// Messages for the feedback console application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Feedback form
    /// Raise the draft rating by one star.
    RatingUp,
    /// Lower the draft rating by one star.
    RatingDown,
    /// Append a character to the draft review.
    InsertChar(char),
    /// Delete the last character of the draft review.
    DeleteChar,
    /// Validate and submit the draft.
    SubmitReview,
    /// The submit request settled.
    SubmitCompleted {
        /// Result returned by the gateway.
        result: Result<SubmitReceipt, ApiError>,
        /// Time from dispatch to completion, in milliseconds.
        latency_ms: u64,
    },
    /// The success message timed out.
    ResetForm {
        /// Reset generation the timer was scheduled for.
        generation: u64,
    },

    // Dashboard navigation
    /// Move the row cursor up.
    CursorUp,
    /// Move the row cursor down.
    CursorDown,
    /// Move the row cursor to the first row.
    Home,
    /// Move the row cursor to the last row.
    End,
    /// Open the detail overlay for the row under the cursor.
    OpenDetail,
    /// Go to the next page.
    NextPage,
    /// Go to the previous page.
    PrevPage,
    /// Cycle the submissions filter.
    CycleFilter,

    // Dashboard data
    /// Refresh the dashboard now.
    RefreshRequested,
    /// The refresh interval elapsed.
    RefreshTick {
        /// Mount the interval belongs to.
        mount: u64,
        /// Interval generation the timer was armed with.
        generation: u64,
    },
    /// Both fetches of a refresh settled.
    RefreshCompleted {
        /// Mount the refresh was dispatched from.
        mount: u64,
        /// Results of the list and statistics fetches.
        outcome: RefreshOutcome,
        /// Time from dispatch to completion, in milliseconds.
        latency_ms: u64,
    },

    // Application lifecycle
    /// Switch between the feedback form and the dashboard.
    SwitchRoute,
    /// Close the topmost overlay, or quit from the feedback form.
    EscapePressed,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for feedback form messages.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::RatingUp
                | Self::RatingDown
                | Self::InsertChar(_)
                | Self::DeleteChar
                | Self::SubmitReview
                | Self::SubmitCompleted { .. }
                | Self::ResetForm { .. }
        )
    }

    /// Returns true for dashboard navigation messages.
    #[must_use]
    pub const fn is_dashboard_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::Home
                | Self::End
                | Self::OpenDetail
                | Self::NextPage
                | Self::PrevPage
                | Self::CycleFilter
        )
    }

    /// Returns true for dashboard data messages.
    #[must_use]
    pub const fn is_dashboard_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested | Self::RefreshTick { .. } | Self::RefreshCompleted { .. }
        )
    }
}

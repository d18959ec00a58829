//! UI components for the feedback console.
//!
//! Components are stateless renderers: each takes a borrowed view context
//! and returns the rendered text. All state lives in [`crate::tui::state`].

mod feedback_form;
mod stats_panel;
mod submission_detail;
mod submission_table;
mod text;

#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use feedback_form::{FeedbackFormComponent, FeedbackFormViewContext};
pub use stats_panel::{BAR_CELLS, StatsPanelComponent, StatsPanelViewContext};
pub use submission_detail::{SubmissionDetailComponent, SubmissionDetailViewContext};
pub use submission_table::{SubmissionTableComponent, SubmissionTableViewContext};

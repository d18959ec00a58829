//! CLI operation mode handlers.
//!
//! - [`feedback_tui`]: interactive feedback form and dashboard
//! - [`show_submission`]: print one submission
//! - [`stats_summary`]: print aggregate statistics
//! - [`submit_once`]: submit a single review from flags
//!
//! Output formatting utilities are in [`output`].

pub mod feedback_tui;
pub mod output;
pub mod show_submission;
pub mod stats_summary;
pub mod submit_once;

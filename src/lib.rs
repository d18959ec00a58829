//! Feedback console library crate.
//!
//! A terminal client for a rating-and-review backend: end users submit a
//! one-to-five star rating with a review and read the generated reply, and
//! administrators watch a dashboard of submissions and aggregate statistics
//! that refreshes itself every thirty seconds.
//!
//! The backend is reached through the [`api::FeedbackGateway`] trait; the
//! interactive surface lives in [`tui`].

pub mod api;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use api::{ApiError, FeedbackGateway, HttpFeedbackGateway};
pub use config::{FeedbackConfig, OperationMode};

//! Feedback form handlers.
//!
//! Editing goes straight to the [`SubmissionFlow`](crate::tui::state::SubmissionFlow).
//! Submitting spawns the gateway call as a command, and a successful result
//! arms the reset timer for the success message.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::time::Instant;

use super::FeedbackApp;
use crate::api::FeedbackGateway;
use crate::api::error::ApiError;
use crate::api::models::{NewReview, SubmitReceipt};
use crate::telemetry::{TelemetryEvent, duration_millis};
use crate::tui::messages::AppMsg;
use crate::tui::state::{RESET_DELAY, SubmitOutcome};
use crate::tui::timer::ScheduledTimer;

impl FeedbackApp {
    /// Dispatches feedback form messages to their handlers.
    pub(super) fn handle_form_msg(&mut self, msg: AppMsg) -> Vec<Cmd> {
        match msg {
            AppMsg::RatingUp => {
                let _changed = self.form.increase_rating();
                Vec::new()
            }
            AppMsg::RatingDown => {
                let _changed = self.form.decrease_rating();
                Vec::new()
            }
            AppMsg::InsertChar(character) => {
                let _inserted = self.form.push_char(character);
                Vec::new()
            }
            AppMsg::DeleteChar => {
                let _deleted = self.form.backspace();
                Vec::new()
            }
            AppMsg::SubmitReview => self.handle_submit(),
            AppMsg::SubmitCompleted { result, latency_ms } => {
                self.handle_submit_completed(result, latency_ms)
            }
            AppMsg::ResetForm { generation } => {
                self.handle_reset(generation);
                Vec::new()
            }
            _ => {
                // Unreachable: caller filters to form messages.
                Vec::new()
            }
        }
    }

    fn handle_submit(&mut self) -> Vec<Cmd> {
        match self.form.submit() {
            SubmitOutcome::Dispatch(request) => {
                // A new submission supersedes the pending reset.
                if let Some(mut timer) = self.reset_timer.take() {
                    timer.cancel();
                }
                vec![submit_cmd(Arc::clone(&self.gateway), request)]
            }
            SubmitOutcome::Rejected(error) => {
                tracing::debug!(%error, "review rejected before sending");
                Vec::new()
            }
            SubmitOutcome::Busy => Vec::new(),
        }
    }

    fn handle_submit_completed(
        &mut self,
        result: Result<SubmitReceipt, ApiError>,
        latency_ms: u64,
    ) -> Vec<Cmd> {
        self.telemetry.record(TelemetryEvent::SubmissionCompleted {
            latency_ms,
            success: result.is_ok(),
        });

        let Some(generation) = self.form.complete(result) else {
            return Vec::new();
        };
        let (timer, cmd) = ScheduledTimer::schedule(RESET_DELAY, AppMsg::ResetForm { generation });
        self.reset_timer = Some(timer);
        vec![cmd]
    }

    fn handle_reset(&mut self, generation: u64) {
        if self.form.reset(generation) {
            self.reset_timer = None;
        } else {
            tracing::debug!(generation, "ignoring stale form reset");
        }
    }
}

/// Creates a command that submits `request` and reports the outcome.
fn submit_cmd(gateway: Arc<dyn FeedbackGateway>, request: NewReview) -> Cmd {
    Box::pin(async move {
        let started = Instant::now();
        let result = gateway.submit_review(&request).await;
        let latency_ms = duration_millis(started.elapsed());
        Some(Box::new(AppMsg::SubmitCompleted { result, latency_ms }) as Box<dyn Any + Send>)
    })
}

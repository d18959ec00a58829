//! Scenario state for submission flow BDD tests.

use std::sync::Arc;

use feedback_console::api::InMemoryFeedbackGateway;
use feedback_console::telemetry::test_support::RecordingTelemetrySink;
use feedback_console::tui::state::SubmissionPhase;
use feedback_console::tui::test_support::AppDriver;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a submission flow scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct FormState {
    /// Paused runtime the console's timers run on.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// In-memory backend shared with the console.
    pub(crate) gateway: Slot<Arc<InMemoryFeedbackGateway>>,
    /// Telemetry recorded by the console.
    pub(crate) telemetry: Slot<RecordingTelemetrySink>,
    /// Console under test.
    pub(crate) driver: Slot<AppDriver>,
}

impl FormState {
    /// Returns the form's current phase.
    pub(crate) fn phase(&self) -> Option<SubmissionPhase> {
        self.driver
            .with_ref(|driver| driver.app().form().phase().clone())
    }

    /// Returns the unsent review text.
    pub(crate) fn review(&self) -> Option<String> {
        self.driver
            .with_ref(|driver| driver.app().form().draft().review().to_owned())
    }
}

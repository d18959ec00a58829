//! Scenario state for dashboard refresh BDD tests.

use std::sync::Arc;

use feedback_console::api::InMemoryFeedbackGateway;
use feedback_console::telemetry::TelemetryEvent;
use feedback_console::telemetry::test_support::RecordingTelemetrySink;
use feedback_console::tui::state::Dashboard;
use feedback_console::tui::test_support::AppDriver;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a dashboard scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct DashboardState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) gateway: Slot<Arc<InMemoryFeedbackGateway>>,
    pub(crate) telemetry: Slot<RecordingTelemetrySink>,
    pub(crate) driver: Slot<AppDriver>,
}

impl DashboardState {
    /// Reads from the mounted dashboard.
    pub(crate) fn with_dashboard<R>(&self, read: impl FnOnce(&Dashboard) -> R) -> Option<R> {
        self.driver
            .with_ref(|driver| driver.app().dashboard().map(read))
            .flatten()
    }

    /// Returns every refresh event recorded so far.
    pub(crate) fn refresh_events(&self) -> Vec<TelemetryEvent> {
        self.telemetry
            .with_ref(RecordingTelemetrySink::events)
            .unwrap_or_default()
            .into_iter()
            .filter(|event| matches!(event, TelemetryEvent::DashboardRefreshed { .. }))
            .collect()
    }
}

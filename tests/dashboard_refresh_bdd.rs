//! Behavioural tests for dashboard mounting and periodic refresh.

#[path = "dashboard_refresh_bdd/mod.rs"]
mod dashboard_refresh_bdd_support;
mod support;

use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Model;
use dashboard_refresh_bdd_support::DashboardState;
use feedback_console::ApiError;
use feedback_console::api::InMemoryFeedbackGateway;
use feedback_console::api::models::test_support::submissions_with_ids;
use feedback_console::telemetry::TelemetryEvent;
use feedback_console::tui::Route;
use feedback_console::tui::components::test_utils::strip_ansi_codes;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::console::{StepResult, elapse, open_console, press_named};

#[fixture]
fn dashboard_state() -> DashboardState {
    DashboardState::default()
}

// Given steps

#[given("a feedback backend with {count:u64} submissions")]
fn given_backend_with_submissions(dashboard_state: &DashboardState, count: u64) {
    let gateway = InMemoryFeedbackGateway::seeded(submissions_with_ids(1..=count));
    dashboard_state.gateway.set(Arc::new(gateway));
}

#[given("the console is open on the dashboard")]
fn given_console_on_dashboard(dashboard_state: &DashboardState) -> StepResult {
    open_console(
        &dashboard_state.runtime,
        &dashboard_state.gateway,
        &dashboard_state.telemetry,
        &dashboard_state.driver,
        Route::Admin,
    )
}

#[given("the backend fails the next list request")]
fn given_list_failure(dashboard_state: &DashboardState) -> StepResult {
    let gateway = dashboard_state
        .gateway
        .get()
        .ok_or("gateway must be initialised")?;
    gateway.fail_next_list(ApiError::Network {
        message: "connection reset".to_owned(),
    });
    Ok(())
}

// When steps

#[when("the user presses {key}")]
fn when_user_presses(dashboard_state: &DashboardState, key: String) -> StepResult {
    press_named(&dashboard_state.runtime, &dashboard_state.driver, &key)
}

#[when("{seconds:u64} seconds elapse")]
fn when_seconds_elapse(dashboard_state: &DashboardState, seconds: u64) -> StepResult {
    elapse(
        &dashboard_state.runtime,
        &dashboard_state.driver,
        Duration::from_secs(seconds),
    )
}

#[when("one more second elapses")]
fn when_one_more_second(dashboard_state: &DashboardState) -> StepResult {
    elapse(
        &dashboard_state.runtime,
        &dashboard_state.driver,
        Duration::from_secs(1),
    )
}

// Then steps

#[then("the dashboard shows {rows:usize} rows")]
fn then_dashboard_rows(dashboard_state: &DashboardState, rows: usize) -> StepResult {
    let shown = dashboard_state
        .with_dashboard(|dashboard| dashboard.submissions().len())
        .ok_or("dashboard must be mounted")?;
    assert_eq!(shown, rows, "row count mismatch");
    Ok(())
}

#[then("the dashboard is on page {page:u32}")]
fn then_dashboard_page(dashboard_state: &DashboardState, page: u32) -> StepResult {
    let current = dashboard_state
        .with_dashboard(|dashboard| dashboard.page().current_page())
        .ok_or("dashboard must be mounted")?;
    assert_eq!(current, page, "page mismatch");
    Ok(())
}

#[then("the backend list call count is {count:usize}")]
fn then_list_call_count(dashboard_state: &DashboardState, count: usize) -> StepResult {
    let gateway = dashboard_state
        .gateway
        .get()
        .ok_or("gateway must be initialised")?;
    assert_eq!(gateway.list_calls(), count, "list call count mismatch");
    Ok(())
}

#[then("the screen shows {text}")]
fn then_screen_shows(dashboard_state: &DashboardState, text: String) -> StepResult {
    let rendered = dashboard_state
        .driver
        .with_ref(|driver| strip_ansi_codes(&driver.app().view()))
        .ok_or("console must be open")?;
    let expected = text.trim_matches('"');
    if !rendered.contains(expected) {
        return Err(format!("expected screen text '{expected}', got:\n{rendered}").into());
    }
    Ok(())
}

#[then("{count:usize} refreshes were recorded")]
fn then_refreshes_recorded(dashboard_state: &DashboardState, count: usize) {
    assert_eq!(dashboard_state.refresh_events().len(), count);
}

#[then("the last refresh recorded a failed list")]
fn then_last_refresh_failed(dashboard_state: &DashboardState) -> StepResult {
    let last = dashboard_state
        .refresh_events()
        .pop()
        .ok_or("no refresh was recorded")?;
    let TelemetryEvent::DashboardRefreshed {
        list_ok, stats_ok, ..
    } = last
    else {
        return Err(format!("unexpected event {last:?}").into());
    };
    assert!(!list_ok, "list fetch should have failed");
    assert!(stats_ok, "statistics fetch should have succeeded");
    Ok(())
}

// Scenario bindings

#[scenario(path = "tests/features/dashboard_refresh.feature", index = 0)]
fn mounting_loads_dashboard(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard_refresh.feature", index = 1)]
fn dashboard_refreshes_on_interval(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard_refresh.feature", index = 2)]
fn leaving_stops_refreshing(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard_refresh.feature", index = 3)]
fn page_change_restarts_interval(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard_refresh.feature", index = 4)]
fn failed_list_keeps_rows(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

#[scenario(path = "tests/features/dashboard_refresh.feature", index = 5)]
fn opening_submission_shows_details(dashboard_state: DashboardState) {
    let _ = dashboard_state;
}

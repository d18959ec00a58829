//! Helpers for driving the console inside a scenario.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyCode;
use feedback_console::api::InMemoryFeedbackGateway;
use feedback_console::telemetry::test_support::RecordingTelemetrySink;
use feedback_console::tui::Route;
use feedback_console::tui::test_support::AppDriver;
use rstest_bdd::Slot;

use super::runtime::{SharedRuntime, ensure_runtime};

/// Result type returned by scenario steps.
pub type StepResult<T = ()> = Result<T, Box<dyn Error>>;

/// Starts the console on `route` against the scenario's gateway.
pub fn open_console(
    runtime: &Slot<SharedRuntime>,
    gateway: &Slot<Arc<InMemoryFeedbackGateway>>,
    telemetry: &Slot<RecordingTelemetrySink>,
    driver: &Slot<AppDriver>,
    route: Route,
) -> StepResult {
    let shared = ensure_runtime(runtime)?;
    let backend = gateway.get().ok_or("gateway must be initialised")?;
    let sink = RecordingTelemetrySink::default();
    telemetry.set(sink.clone());

    let _context = shared.enter();
    driver.set(AppDriver::start(backend, Arc::new(sink), route));
    Ok(())
}

/// Runs `action` against the driver inside the runtime context.
pub fn drive<R>(
    runtime: &Slot<SharedRuntime>,
    driver: &Slot<AppDriver>,
    action: impl FnOnce(&mut AppDriver) -> R,
) -> StepResult<R> {
    let shared = ensure_runtime(runtime)?;
    let _context = shared.enter();
    driver
        .with_mut(action)
        .ok_or_else(|| "console must be open".into())
}

/// Advances the paused clock and delivers whatever fired.
pub fn elapse(
    runtime: &Slot<SharedRuntime>,
    driver: &Slot<AppDriver>,
    duration: Duration,
) -> StepResult {
    let shared = ensure_runtime(runtime)?;
    driver
        .with_mut(|app_driver| shared.block_on(app_driver.advance(duration)))
        .ok_or("console must be open")?;
    Ok(())
}

/// Presses a key named in a feature file, such as `"enter"` or `"n"`.
pub fn press_named(
    runtime: &Slot<SharedRuntime>,
    driver: &Slot<AppDriver>,
    name: &str,
) -> StepResult {
    let code = key_code(name.trim_matches('"'))?;
    drive(runtime, driver, |app_driver| app_driver.press(code))?;
    Ok(())
}

fn key_code(name: &str) -> StepResult<KeyCode> {
    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(character), None) => KeyCode::Char(character),
                _ => return Err(format!("unknown key name '{other}'").into()),
            }
        }
    };
    Ok(code)
}

//! Startup context storage for the feedback TUI.
//!
//! `bubbletea_rs::Model::init()` takes no arguments, so everything the app
//! needs at startup is stored in module-level `OnceLock` values by the CLI
//! wiring before the program starts. Each getter has a fallback so the app
//! still starts (and reports configuration errors inline) when a value was
//! never set.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::api::{FeedbackGateway, UnconfiguredGateway};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::Route;

/// Gateway used by the form and the dashboard.
static GATEWAY: OnceLock<Arc<dyn FeedbackGateway>> = OnceLock::new();

/// Fallback gateway, allocated once.
static DEFAULT_GATEWAY: OnceLock<Arc<dyn FeedbackGateway>> = OnceLock::new();

/// Route shown on startup.
static INITIAL_ROUTE: OnceLock<Route> = OnceLock::new();

/// Terminal dimensions captured before the program starts.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Telemetry sink for submission and refresh events.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Fallback telemetry sink, allocated once.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

const FALLBACK_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Sets the gateway used by the TUI.
///
/// Returns `true` if the gateway was set, `false` if it was already set.
pub fn set_gateway(gateway: Arc<dyn FeedbackGateway>) -> bool {
    GATEWAY.set(gateway).is_ok()
}

/// Sets the route shown on startup.
///
/// Returns `true` if the route was set, `false` if it was already set.
pub fn set_initial_route(route: Route) -> bool {
    INITIAL_ROUTE.set(route).is_ok()
}

/// Sets the initial terminal dimensions so the first frame fits.
///
/// Returns `true` if the dimensions were set, `false` if they were already
/// set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink. Without this, a no-op sink is used.
///
/// Returns `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Returns the configured gateway, or one that refuses every call.
pub(crate) fn get_gateway() -> Arc<dyn FeedbackGateway> {
    GATEWAY.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_GATEWAY.get_or_init(|| Arc::new(UnconfiguredGateway)))
    })
}

/// Returns the startup route, defaulting to the feedback form.
pub(crate) fn get_initial_route() -> Route {
    INITIAL_ROUTE.get().copied().unwrap_or_default()
}

/// Returns the telemetry sink, or a no-op sink if none was configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Returns the stored terminal size, querying the terminal as a fallback.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .or_else(|| terminal::size().ok())
        .unwrap_or(FALLBACK_TERMINAL_SIZE)
}

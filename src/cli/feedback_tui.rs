//! Interactive TUI mode.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;

use feedback_console::telemetry::TelemetrySink;
use feedback_console::tui::{
    FeedbackApp, set_gateway, set_initial_route, set_initial_terminal_size, set_telemetry_sink,
};
use feedback_console::{ApiError, FeedbackConfig, FeedbackGateway};

/// Runs the feedback form and dashboard until the user quits.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when the terminal program fails.
pub async fn run(
    config: &FeedbackConfig,
    gateway: Arc<dyn FeedbackGateway>,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<(), ApiError> {
    // Startup storage is write-once; a second run in the same process keeps
    // the first values.
    let _gateway_set = set_gateway(gateway);
    let _telemetry_set = set_telemetry_sink(telemetry);
    let _route_set = set_initial_route(config.route());
    if let Ok((width, height)) = terminal::size() {
        let _size_set = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<FeedbackApp>::builder().alt_screen(true).build()?;
    program.run().await?;

    io::stdout().flush().ok();
    Ok(())
}

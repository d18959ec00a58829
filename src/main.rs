//! Feedback console CLI entrypoint.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use feedback_console::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use feedback_console::{ApiError, FeedbackConfig, HttpFeedbackGateway, OperationMode};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;
    config.validate()?;
    init_logging(&config)?;

    let gateway = HttpFeedbackGateway::new(&config.api_url, config.request_timeout())?;
    tracing::info!(
        api_url = %gateway.base_url(),
        mode = ?config.operation_mode(),
        "feedback console starting"
    );

    match config.operation_mode() {
        OperationMode::ShowSubmission => cli::show_submission::run(&config, &gateway).await,
        OperationMode::StatisticsSummary => cli::stats_summary::run(&gateway).await,
        OperationMode::SubmitOnce => cli::submit_once::run(&config, &gateway).await,
        OperationMode::Interactive => {
            cli::feedback_tui::run(&config, Arc::new(gateway), telemetry_sink(&config)).await
        }
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<FeedbackConfig, ApiError> {
    FeedbackConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}

/// Sends `tracing` output to the configured log file.
///
/// Without a log file nothing is installed: the TUI owns the terminal and
/// stderr carries telemetry.
fn init_logging(config: &FeedbackConfig) -> Result<(), ApiError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| ApiError::Io {
            message: format!("failed to open log file {path}: {error}"),
        })?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| ApiError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}

fn telemetry_sink(config: &FeedbackConfig) -> Arc<dyn TelemetrySink> {
    if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

//! Application telemetry events and sinks.
//!
//! The console is a local tool, but it still records a few operational
//! signals: how long submissions take and how each dashboard refresh
//! settled. Events are never transmitted anywhere.

use std::io;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A submit-review request settled.
    SubmissionCompleted {
        /// Time from dispatch to completion, in milliseconds.
        latency_ms: u64,
        /// Whether the backend accepted the submission.
        success: bool,
    },
    /// Both fetches of one dashboard refresh settled.
    DashboardRefreshed {
        /// Dispatch sequence number of the refresh.
        sequence: u64,
        /// Time from dispatch to completion, in milliseconds.
        latency_ms: u64,
        /// Number of submissions returned, zero when the list fetch failed.
        item_count: usize,
        /// Whether the list fetch succeeded.
        list_ok: bool,
        /// Whether the statistics fetch succeeded.
        stats_ok: bool,
    },
}

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
#[must_use]
pub fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Telemetry helpers for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Arc, Mutex};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingTelemetrySink {
        events: Arc<Mutex<Vec<TelemetryEvent>>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the events recorded so far.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }

        /// Removes and returns the events recorded so far.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|mut events| events.drain(..).collect())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink, duration_millis};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::SubmissionCompleted {
            latency_ms: 120,
            success: true,
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::SubmissionCompleted {
                latency_ms: 120,
                success: true,
            }]
        );
        assert!(sink.events().is_empty());
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::DashboardRefreshed {
            sequence: 3,
            latency_ms: 45,
            item_count: 20,
            list_ok: true,
            stats_ok: false,
        };

        assert_eq!(
            serde_json::to_value(&event).expect("event should serialise"),
            json!({
                "type": "dashboard_refreshed",
                "sequence": 3,
                "latency_ms": 45,
                "item_count": 20,
                "list_ok": true,
                "stats_ok": false
            })
        );
    }

    #[test]
    fn duration_is_reported_in_whole_milliseconds() {
        assert_eq!(duration_millis(Duration::from_micros(2_500)), 2);
    }
}

//! Application telemetry events and sinks.
//!
//! Shipdesk records a handful of operational signals (schema version after
//! migrations, filter commits, selection downloads) so a local run can be
//! debugged without attaching a tracing subscriber.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Shipdesk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the current database schema version after migrations apply.
    SchemaVersionRecorded {
        /// Diesel migration version string (e.g. `20260301000000`).
        schema_version: String,
    },

    /// Staged filters were committed to the shipment table.
    FiltersCommitted {
        /// Number of shipments visible after the commit.
        visible_count: usize,
        /// Total number of shipments held by the store.
        total_count: usize,
        /// Whether the committed criteria restrict the list at all.
        filtered: bool,
    },

    /// The selection was handed to a download hook.
    SelectionDownloaded {
        /// Number of shipments passed to the hook.
        shipment_count: usize,
        /// Export format label (`markdown` or `jsonl`).
        format: String,
    },
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
///
/// This is intended for local debugging and is not transmitted anywhere.
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

/// In-memory sinks for tests.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Arc, Mutex};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event for later inspection.
    ///
    /// Clones share the same event buffer.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingTelemetrySink {
        events: Arc<Mutex<Vec<TelemetryEvent>>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }

        /// Drains and returns the recorded events.
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
    use rstest::rstest;

    use super::test_support::RecordingTelemetrySink;
    use super::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::SchemaVersionRecorded {
            schema_version: "20260301000000".to_owned(),
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::SchemaVersionRecorded {
                schema_version: "20260301000000".to_owned(),
            }]
        );
        assert!(sink.events().is_empty(), "take should drain the buffer");
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopTelemetrySink.record(TelemetryEvent::SelectionDownloaded {
            shipment_count: 2,
            format: "jsonl".to_owned(),
        });
    }

    #[rstest]
    #[case::commit(
        TelemetryEvent::FiltersCommitted { visible_count: 2, total_count: 3, filtered: true },
        r#"{"type":"filters_committed","visible_count":2,"total_count":3,"filtered":true}"#
    )]
    #[case::download(
        TelemetryEvent::SelectionDownloaded { shipment_count: 1, format: "markdown".to_owned() },
        r#"{"type":"selection_downloaded","shipment_count":1,"format":"markdown"}"#
    )]
    fn events_serialise_with_snake_case_tag(#[case] event: TelemetryEvent, #[case] expected: &str) {
        let encoded = serde_json::to_string(&event).expect("event should encode");
        assert_eq!(encoded, expected);
    }
}

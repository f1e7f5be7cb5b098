//! Download hooks invoked with the current selection.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;

use crate::api::ApiError;
use crate::shipments::Shipment;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::{ExportFormat, io_error, write_jsonl, write_markdown};

/// Receives the shipments a user asked to download.
pub trait DownloadHook: fmt::Debug {
    /// Delivers `shipments` to the hook's destination.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the destination cannot be written.
    fn download(&mut self, shipments: &[&Shipment]) -> Result<(), ApiError>;

    /// File the hook writes to, when it writes to one.
    fn destination(&self) -> Option<Utf8PathBuf> {
        None
    }
}

/// Writes downloads to an [`io::Write`](std::io::Write) sink.
pub struct WriterDownloadHook<W> {
    writer: W,
    format: ExportFormat,
    telemetry: Arc<dyn TelemetrySink>,
}

impl<W: Write> WriterDownloadHook<W> {
    /// Creates a hook writing `format` to `writer`.
    #[must_use]
    pub fn new(writer: W, format: ExportFormat) -> Self {
        Self {
            writer,
            format,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Records a [`TelemetryEvent::SelectionDownloaded`] on every download.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the configured format.
    #[must_use]
    pub const fn format(&self) -> ExportFormat {
        self.format
    }

    /// Consumes the hook and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> fmt::Debug for WriterDownloadHook<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterDownloadHook")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl<W: Write> DownloadHook for WriterDownloadHook<W> {
    fn download(&mut self, shipments: &[&Shipment]) -> Result<(), ApiError> {
        match self.format {
            ExportFormat::Markdown => write_markdown(&mut self.writer, shipments)?,
            ExportFormat::Jsonl => write_jsonl(&mut self.writer, shipments)?,
        }
        self.writer.flush().map_err(|e| io_error(&e))?;

        tracing::debug!(
            count = shipments.len(),
            format = self.format.as_str(),
            "selection downloaded"
        );
        self.telemetry.record(TelemetryEvent::SelectionDownloaded {
            shipment_count: shipments.len(),
            format: self.format.as_str().to_owned(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::shipments::sample_shipments;
    use crate::store::ShipmentFilterStore;
    use crate::telemetry::test_support::RecordingTelemetrySink;

    #[rstest]
    fn downloads_selected_shipments_in_source_order() {
        let mut store = ShipmentFilterStore::new(sample_shipments());
        store.toggle_select_one(&"3".into());
        store.toggle_select_one(&"1".into());
        let mut hook = WriterDownloadHook::new(Vec::new(), ExportFormat::Jsonl);

        hook.download(&store.selected_shipments())
            .expect("download should succeed");

        let output = String::from_utf8(hook.into_inner()).expect("valid UTF-8");
        let orders: Vec<String> = output
            .lines()
            .map(|line| {
                let shipment: Shipment = serde_json::from_str(line).expect("line should decode");
                shipment.order_number
            })
            .collect();
        assert_eq!(orders, vec!["3446788", "2024021"]);
    }

    #[rstest]
    #[case::markdown(ExportFormat::Markdown, "markdown")]
    #[case::jsonl(ExportFormat::Jsonl, "jsonl")]
    fn records_download_telemetry(#[case] format: ExportFormat, #[case] label: &str) {
        let shipments = sample_shipments();
        let selected: Vec<&Shipment> = shipments.iter().take(2).collect();
        let telemetry = RecordingTelemetrySink::default();
        let mut hook =
            WriterDownloadHook::new(Vec::new(), format).with_telemetry(Arc::new(telemetry.clone()));

        hook.download(&selected).expect("download should succeed");

        assert_eq!(
            telemetry.take(),
            vec![TelemetryEvent::SelectionDownloaded {
                shipment_count: 2,
                format: label.to_owned(),
            }]
        );
    }

    #[rstest]
    fn markdown_hook_writes_header() {
        let mut hook = WriterDownloadHook::new(Vec::new(), ExportFormat::Markdown);

        hook.download(&[]).expect("download should succeed");

        let output = String::from_utf8(hook.into_inner()).expect("valid UTF-8");
        assert!(output.starts_with("# Selected Shipments"));
    }
}

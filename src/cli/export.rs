//! Shipment export operation.
//!
//! Selects every shipment passing the configured criteria and hands the
//! selection to a [`WriterDownloadHook`] targeting the output file or
//! stdout.

use std::fs::File;
use std::io::{self, BufWriter};

use shipdesk::export::{DownloadHook, ExportFormat, WriterDownloadHook};
use shipdesk::store::ShipmentFilterStore;
use shipdesk::{ApiError, ShipdeskConfig};

use super::filtered_store;

/// Exports the filtered shipments in the configured format.
///
/// # Errors
///
/// Returns an error if:
/// - The export format is missing or unsupported
/// - The shipments or criteria cannot be loaded
/// - Writing to the output fails
pub fn run(config: &ShipdeskConfig) -> Result<(), ApiError> {
    let format = config
        .export_format()?
        .ok_or_else(|| ApiError::Configuration {
            message: "export format is required (use --export markdown or --export jsonl)"
                .to_owned(),
        })?;
    let mut store = filtered_store(config)?;

    if let Some(path) = config.output_path() {
        let file = File::create(&path).map_err(|e| ApiError::Io {
            message: format!("failed to create output file '{path}': {e}"),
        })?;
        export_visible(&mut store, BufWriter::new(file), format)
    } else {
        export_visible(&mut store, io::stdout().lock(), format)
    }
}

/// Selects every visible shipment and writes the selection to `writer`.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn export_visible<W: io::Write>(
    store: &mut ShipmentFilterStore,
    writer: W,
    format: ExportFormat,
) -> Result<(), ApiError> {
    if !store.all_selected() {
        store.toggle_select_all();
    }
    let mut hook = WriterDownloadHook::new(writer, format);
    hook.download(&store.selected_shipments())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use shipdesk::ShipdeskConfig;
    use shipdesk::export::ExportFormat;
    use shipdesk::shipments::sample_shipments;
    use shipdesk::store::{ShipmentFilterStore, StagedField};
    use tempfile::TempDir;

    use super::{export_visible, run};

    #[rstest]
    fn exports_only_visible_shipments() {
        let mut store = ShipmentFilterStore::new(sample_shipments());
        store.set_staged_field(StagedField::Query("lópez".to_owned()));
        store.commit_filters();
        let mut buffer = Vec::new();

        export_visible(&mut store, &mut buffer, ExportFormat::Jsonl).expect("export");

        let output = String::from_utf8(buffer).expect("utf-8 output");
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("\"numeroOrden\":\"2024021\""));
    }

    #[rstest]
    fn missing_format_is_a_configuration_error() {
        let config = ShipdeskConfig::default();

        let error = run(&config).expect_err("format is required");

        assert!(error.to_string().contains("export format is required"));
    }

    #[rstest]
    fn writes_markdown_to_the_output_file() {
        let temp_dir = TempDir::new().expect("temporary directory");
        let path = temp_dir.path().join("shipments.md");
        let config = ShipdeskConfig {
            export: Some("markdown".to_owned()),
            output: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };

        run(&config).expect("export");

        let written = std::fs::read_to_string(&path).expect("read export");
        assert!(written.starts_with("# Selected Shipments\n\n3 shipments selected."));
    }
}

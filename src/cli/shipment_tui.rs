//! TUI mode for browsing and selecting shipments.

use std::io::{self, Write};

use bubbletea_rs::Program;
use camino::Utf8PathBuf;
use crossterm::terminal;

use shipdesk::export::ExportFormat;
use shipdesk::persistence::PreferenceStore;
use shipdesk::tui::{
    DownloadTarget, ShipmentApp, set_download_target, set_filter_storage, set_initial_shipments,
    set_initial_terminal_size,
};
use shipdesk::{ApiError, ShipdeskConfig};

use super::{load_shipments, map_persistence_error};

/// Runs the shipment history TUI.
///
/// # Errors
///
/// Returns an error if:
/// - The shipments file cannot be loaded
/// - The database URL or export format is invalid
/// - The TUI fails to initialise
pub async fn run(config: &ShipdeskConfig) -> Result<(), ApiError> {
    let shipments = load_shipments(config)?;
    let target = download_target(config)?;

    // Setters are no-ops when already set; the first value wins.
    let _ = set_initial_shipments(shipments);
    let _ = set_download_target(target);
    if let Some(database_url) = config.database_url.as_deref() {
        let store = PreferenceStore::new(database_url).map_err(|e| map_persistence_error(&e))?;
        let _ = set_filter_storage(store);
    }
    if let Ok((width, height)) = terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Resolves where `d` writes the selection.
///
/// Defaults to `shipments-selection.md` (or `.jsonl`) in the working
/// directory.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] for an unsupported export format.
pub fn download_target(config: &ShipdeskConfig) -> Result<DownloadTarget, ApiError> {
    let format = config.export_format()?.unwrap_or_default();
    let path = config
        .output_path()
        .unwrap_or_else(|| Utf8PathBuf::from(format!("shipments-selection.{}", extension(format))));
    Ok(DownloadTarget { path, format })
}

const fn extension(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Markdown => "md",
        ExportFormat::Jsonl => "jsonl",
    }
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ShipmentApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}

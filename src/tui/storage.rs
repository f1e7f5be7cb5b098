//! Startup context storage for the shipment TUI.
//!
//! bubbletea-rs builds the model through the static `Model::init`, so the
//! CLI places everything the model needs into these `OnceLock` values before
//! the program starts.

use std::fmt;
use std::fs::File;
use std::sync::{Arc, OnceLock};

use camino::Utf8PathBuf;
use crossterm::terminal;

use crate::api::ApiError;
use crate::export::{DownloadHook, ExportFormat, WriterDownloadHook};
use crate::persistence::{PersistenceError, PreferenceKey, PreferenceStore};
use crate::shipments::Shipment;
use crate::store::PersistedFilters;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the shipment list shown on startup.
static INITIAL_SHIPMENTS: OnceLock<Vec<Shipment>> = OnceLock::new();

/// Global storage for initial terminal dimensions.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the preference store used to restore and persist
/// filters.
static FILTER_STORAGE: OnceLock<PreferenceStore> = OnceLock::new();

/// Global storage for the download destination.
static DOWNLOAD_TARGET: OnceLock<DownloadTarget> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Where `d` writes the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// File written on each download; replaced every time.
    pub path: Utf8PathBuf,
    /// Format of the written file.
    pub format: ExportFormat,
}

/// Download hook writing to a [`DownloadTarget`] file.
#[derive(Clone)]
pub struct FileDownloadHook {
    target: DownloadTarget,
    telemetry: Arc<dyn TelemetrySink>,
}

impl fmt::Debug for FileDownloadHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDownloadHook")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl FileDownloadHook {
    /// Creates a hook for `target`.
    #[must_use]
    pub const fn new(target: DownloadTarget, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self { target, telemetry }
    }
}

impl DownloadHook for FileDownloadHook {
    fn download(&mut self, shipments: &[&Shipment]) -> Result<(), ApiError> {
        let file = File::create(&self.target.path).map_err(|error| ApiError::Io {
            message: format!("failed to create '{}': {error}", self.target.path),
        })?;
        WriterDownloadHook::new(file, self.target.format)
            .with_telemetry(Arc::clone(&self.telemetry))
            .download(shipments)
    }

    fn destination(&self) -> Option<Utf8PathBuf> {
        Some(self.target.path.clone())
    }
}

/// Sets the shipments shown when the TUI starts.
///
/// Returns `true` if the shipments were set, `false` if they were already
/// set.
pub fn set_initial_shipments(shipments: Vec<Shipment>) -> bool {
    INITIAL_SHIPMENTS.set(shipments).is_ok()
}

/// Sets the initial terminal dimensions.
///
/// Returns `true` if the dimensions were set, `false` if they were already
/// set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Enables filter restoration and persistence through `store`.
///
/// Without it filters start empty and are forgotten on exit.
///
/// Returns `true` if the store was set, `false` if it was already set.
pub fn set_filter_storage(store: PreferenceStore) -> bool {
    FILTER_STORAGE.set(store).is_ok()
}

/// Enables downloads to `target`.
///
/// Returns `true` if the target was set, `false` if it was already set.
pub fn set_download_target(target: DownloadTarget) -> bool {
    DOWNLOAD_TARGET.set(target).is_ok()
}

/// Sets the telemetry sink; a no-op sink is used otherwise.
///
/// Returns `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the initial shipments, or an empty list.
pub(crate) fn get_initial_shipments() -> Vec<Shipment> {
    INITIAL_SHIPMENTS.get().cloned().unwrap_or_default()
}

/// Gets the initial terminal dimensions, falling back to the live terminal
/// size and then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoopTelemetrySink))
}

/// Builds the configured download hook, if any.
pub(crate) fn get_download_hook() -> Option<FileDownloadHook> {
    DOWNLOAD_TARGET
        .get()
        .cloned()
        .map(|target| FileDownloadHook::new(target, get_telemetry_sink()))
}

/// Returns true when filters are persisted.
pub(crate) fn has_filter_storage() -> bool {
    FILTER_STORAGE.get().is_some()
}

/// Loads persisted filters, falling back to `None` on any failure.
///
/// Blocking; call from `spawn_blocking`.
pub(crate) fn load_filters() -> Option<PersistedFilters> {
    FILTER_STORAGE
        .get()
        .and_then(|store| store.load_or_warn(PreferenceKey::ShipmentFilters))
}

/// Writes `filters` to storage. A no-op when storage is not configured.
///
/// Blocking; call from `spawn_blocking`.
pub(crate) fn save_filters(filters: &PersistedFilters) -> Result<(), PersistenceError> {
    FILTER_STORAGE
        .get()
        .map_or(Ok(()), |store| {
            store.save(PreferenceKey::ShipmentFilters, filters)
        })
}

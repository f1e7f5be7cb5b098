//! Main TUI application model implementing the MVU pattern.
//!
//! `ShipmentApp` owns the store lifecycle, the cursor over the visible
//! list, and the filter field being edited. Message handling is split by
//! category:
//!
//! - `navigation`: cursor movement and scrolling
//! - `selection_handlers`: checkbox toggles and downloads
//! - `filter_handlers`: staged edits, commit/reset, restore and persistence
//! - `lifecycle_handlers`: quit, help, and resize
//! - `rendering`: view output

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::export::DownloadHook;
use crate::shipments::Shipment;
use crate::store::{LifecyclePhase, ShipmentFilterStore, StoreLifecycle};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::ShipmentListComponent;
use super::messages::AppMsg;
use super::state::{CursorState, FilterInput};

mod filter_handlers;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod selection_handlers;

/// Rows used by the header, filter bar, edit line, table header and status
/// bar.
const CHROME_HEIGHT: u16 = 5;

/// Main application model for the shipment history TUI.
pub struct ShipmentApp {
    /// Store, waiting for persisted filters or ready.
    lifecycle: StoreLifecycle,
    /// Cursor and scroll offset over the visible list.
    pub(crate) cursor: CursorState,
    /// Staged field being typed into, if any.
    pub(crate) editing: Option<FilterInput>,
    /// Last error shown in the status bar.
    pub(crate) error: Option<String>,
    /// Last informational message shown in the status bar.
    pub(crate) status: Option<String>,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    width: u16,
    height: u16,
    shipment_list: ShipmentListComponent,
    download_hook: Option<Box<dyn DownloadHook + Send>>,
    telemetry: Arc<dyn TelemetrySink>,
    /// Whether committed filters are written back to storage.
    persist_filters: bool,
}

impl fmt::Debug for ShipmentApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShipmentApp")
            .field("lifecycle", &self.lifecycle)
            .field("cursor", &self.cursor)
            .field("editing", &self.editing)
            .field("error", &self.error)
            .field("status", &self.status)
            .field("download_hook", &self.download_hook)
            .finish_non_exhaustive()
    }
}

impl ShipmentApp {
    /// Creates an application waiting for persisted filters.
    #[must_use]
    pub fn new(shipments: Vec<Shipment>) -> Self {
        Self::with_dimensions(shipments, 80, 24)
    }

    /// Creates an application sized for a `width` x `height` terminal.
    #[must_use]
    pub fn with_dimensions(shipments: Vec<Shipment>, width: u16, height: u16) -> Self {
        let mut shipment_list = ShipmentListComponent::new();
        shipment_list.set_visible_height(list_height(height));
        Self {
            lifecycle: StoreLifecycle::restoring(shipments),
            cursor: CursorState::default(),
            editing: None,
            error: None,
            status: None,
            show_help: false,
            width,
            height,
            shipment_list,
            download_hook: None,
            telemetry: Arc::new(NoopTelemetrySink),
            persist_filters: false,
        }
    }

    /// Enables `d` by handing selections to `hook`.
    #[must_use]
    pub fn with_download_hook(mut self, hook: Box<dyn DownloadHook + Send>) -> Self {
        self.download_hook = Some(hook);
        self
    }

    /// Records filter commits to `telemetry`.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Writes committed filters back to the configured storage.
    #[must_use]
    pub const fn with_filter_persistence(mut self, enabled: bool) -> Self {
        self.persist_filters = enabled;
        self
    }

    /// Returns the lifecycle phase of the store.
    #[must_use]
    pub const fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase()
    }

    /// Returns the store once persisted filters have been applied.
    #[must_use]
    pub const fn store(&self) -> Option<&ShipmentFilterStore> {
        self.lifecycle.ready()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.cursor_position
    }

    /// Returns the field being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&FilterInput> {
        self.editing.as_ref()
    }

    /// Returns the error shown in the status bar, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the informational message shown in the status bar, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the shipment under the cursor.
    #[must_use]
    pub fn current_shipment(&self) -> Option<&Shipment> {
        self.store()
            .and_then(|store| store.visible_at(self.cursor.cursor_position))
    }

    /// Number of visible rows; zero while restoring.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.store().map_or(0, ShipmentFilterStore::visible_count)
    }

    pub(crate) const fn store_mut(&mut self) -> Option<&mut ShipmentFilterStore> {
        self.lifecycle.ready_mut()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to a handler per message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_selection() {
            return self.handle_selection_msg(msg);
        }
        if msg.is_filter() {
            return self.handle_filter_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}

const fn list_height(height: u16) -> usize {
    height.saturating_sub(CHROME_HEIGHT) as usize
}

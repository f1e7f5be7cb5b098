//! Terminal User Interface for browsing, filtering and selecting shipments.
//!
//! The TUI follows the Model-View-Update (MVU) pattern on top of
//! bubbletea-rs:
//!
//! - **Model**: application state in [`app::ShipmentApp`]
//! - **View**: rendering in the app and in [`components`]
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Startup context
//!
//! bubbletea-rs calls the static `Model::init`, so the shipment list,
//! terminal size, filter storage, download target and telemetry sink are
//! stored in module-level cells before the program starts. Call
//! [`set_initial_shipments`] and the other setters first; anything left
//! unset falls back to a default (no shipments, 80x24, no persistence, no
//! downloads, no telemetry).

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ShipmentApp;
pub use storage::{
    DownloadTarget, FileDownloadHook, set_download_target, set_filter_storage,
    set_initial_shipments, set_initial_terminal_size, set_telemetry_sink,
};

pub(crate) use storage::{
    get_download_hook, get_initial_shipments, get_initial_terminal_size, get_telemetry_sink,
    has_filter_storage, load_filters, save_filters,
};

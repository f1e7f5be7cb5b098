//! Download of selected shipments.
//!
//! The history table hands its selection to a [`DownloadHook`]. The bundled
//! [`WriterDownloadHook`] writes the shipments to any [`std::io::Write`]
//! sink in one of two formats:
//!
//! - **Markdown**: a header with the selection count and one section per
//!   shipment, for humans.
//! - **JSONL**: one JSON object per line using the API field names, for
//!   scripts.
//!
//! Shipments are written in the order they are given; callers pass
//! [`crate::store::ShipmentFilterStore::selected_shipments`], which keeps
//! source order.

mod format;
mod hook;
mod jsonl;
mod markdown;

pub use format::ExportFormat;
pub use hook::{DownloadHook, WriterDownloadHook};
pub use jsonl::write_jsonl;
pub use markdown::write_markdown;

use crate::api::ApiError;

/// Converts an I/O error to an [`ApiError::Io`].
fn io_error(error: &std::io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}

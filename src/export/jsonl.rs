//! JSON Lines writer for downloaded shipments.

use std::io::Write;

use crate::api::ApiError;
use crate::shipments::Shipment;

use super::io_error;

/// Writes each shipment as one JSON object per line.
///
/// Objects use the same field names as the API payloads, so a download can
/// be fed back through `--shipments-file` after wrapping it in an array.
///
/// # Errors
///
/// Returns [`ApiError::Io`] if serialisation or writing fails.
pub fn write_jsonl<W: Write>(writer: &mut W, shipments: &[&Shipment]) -> Result<(), ApiError> {
    for shipment in shipments {
        serde_json::to_writer(&mut *writer, shipment).map_err(|e| ApiError::Io {
            message: format!("JSON serialization failed: {e}"),
        })?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

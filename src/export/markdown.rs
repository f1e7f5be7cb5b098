//! Markdown writer for downloaded shipments.

use std::io::Write;

use crate::api::ApiError;
use crate::shipments::Shipment;

use super::io_error;

/// Writes shipments as a Markdown document.
///
/// The output starts with a header carrying the selection count, followed
/// by one section per shipment with its recipient, destination, package
/// count, date and status.
///
/// # Errors
///
/// Returns [`ApiError::Io`] if writing to the output fails.
pub fn write_markdown<W: Write>(writer: &mut W, shipments: &[&Shipment]) -> Result<(), ApiError> {
    write_header(writer, shipments.len())?;

    for shipment in shipments {
        write_shipment_section(writer, shipment)?;
    }

    Ok(())
}

fn write_header<W: Write>(writer: &mut W, count: usize) -> Result<(), ApiError> {
    let noun = if count == 1 { "shipment" } else { "shipments" };
    writeln!(writer, "# Selected Shipments").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "{count} {noun} selected.").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    Ok(())
}

fn write_shipment_section<W: Write>(writer: &mut W, shipment: &Shipment) -> Result<(), ApiError> {
    writeln!(writer, "---").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "## Order {}", shipment.order_number).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "**Recipient:** {}", shipment.recipient()).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "**Destination:** {}, {}",
        shipment.municipality, shipment.department
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer, "**Packages:** {}", shipment.package_count).map_err(|e| io_error(&e))?;
    writeln!(writer, "**Date:** {}", shipment.date).map_err(|e| io_error(&e))?;
    writeln!(writer, "**Status:** {}", shipment.status).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;
    Ok(())
}

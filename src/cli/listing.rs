//! Plain-text shipment listing.

use std::io::{self, Write};

use shipdesk::store::ShipmentFilterStore;
use shipdesk::{ApiError, ShipdeskConfig};

use super::{filtered_store, io_error};

/// Prints the shipments passing the configured criteria.
///
/// # Errors
///
/// Returns [`ApiError`] when the shipments cannot be loaded, the criteria
/// are invalid, or stdout cannot be written.
pub fn run(config: &ShipdeskConfig) -> Result<(), ApiError> {
    let store = filtered_store(config)?;
    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, &store)
}

/// Writes the visible shipments of `store` to `writer`, one per line.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_listing<W: Write>(writer: &mut W, store: &ShipmentFilterStore) -> Result<(), ApiError> {
    writeln!(
        writer,
        "Shipments ({}/{}) - {}:",
        store.visible_count(),
        store.shipments().len(),
        store.committed().label()
    )
    .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    if store.visible_count() == 0 {
        writeln!(writer, "  No shipments match the current filters.").map_err(|e| io_error(&e))?;
        return Ok(());
    }

    for shipment in store.visible() {
        writeln!(
            writer,
            "  #{} {} - {}, {} ({} pkg) {} [{}]",
            shipment.order_number,
            shipment.recipient(),
            shipment.municipality,
            shipment.department,
            shipment.package_count,
            shipment.date,
            shipment.status,
        )
        .map_err(|e| io_error(&e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use shipdesk::shipments::sample_shipments;
    use shipdesk::store::{ShipmentFilterStore, StagedField};

    use super::write_listing;

    fn render(store: &ShipmentFilterStore) -> String {
        let mut buffer = Vec::new();
        write_listing(&mut buffer, store).expect("write to buffer");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[rstest]
    fn lists_every_shipment_without_filters() {
        let output = render(&ShipmentFilterStore::new(sample_shipments()));

        assert!(output.starts_with("Shipments (3/3) - All:\n\n"));
        assert!(output.contains("  #3446788 Julio Almendarez - San Salvador,"));
        assert_eq!(output.lines().filter(|line| line.starts_with("  #")).count(), 3);
    }

    #[rstest]
    fn reports_an_empty_result() {
        let mut store = ShipmentFilterStore::new(sample_shipments());
        store.set_staged_field(StagedField::Query("nobody".to_owned()));
        store.commit_filters();

        let output = render(&store);

        assert!(output.starts_with("Shipments (0/3) - Search: \"nobody\":"));
        assert!(output.contains("No shipments match the current filters."));
    }
}

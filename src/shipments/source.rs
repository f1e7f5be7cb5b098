//! Shipment list sources.

use std::fs;

use camino::Utf8Path;
use chrono::NaiveDate;

use crate::api::ApiError;

use super::model::{Shipment, ShipmentId, ShipmentStatus};

/// Returns the three-record sample data set used when no file is supplied.
#[must_use]
pub fn sample_shipments() -> Vec<Shipment> {
    vec![
        sample(SampleRow {
            id: "1",
            order_number: "3446788",
            first_name: "Julio",
            last_name: "Almendarez",
            department: "San Salvador",
            municipality: "San Salvador",
            package_count: 4,
            day: 15,
            status: ShipmentStatus::Delivered,
        }),
        sample(SampleRow {
            id: "2",
            order_number: "2024020",
            first_name: "María",
            last_name: "García",
            department: "Cundinamarca",
            municipality: "Bogotá",
            package_count: 1,
            day: 16,
            status: ShipmentStatus::InTransit,
        }),
        sample(SampleRow {
            id: "3",
            order_number: "2024021",
            first_name: "Carlos",
            last_name: "López",
            department: "Valle",
            municipality: "Cali",
            package_count: 3,
            day: 17,
            status: ShipmentStatus::Pending,
        }),
    ]
}

struct SampleRow {
    id: &'static str,
    order_number: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    department: &'static str,
    municipality: &'static str,
    package_count: u32,
    day: u32,
    status: ShipmentStatus,
}

fn sample(row: SampleRow) -> Shipment {
    Shipment {
        id: ShipmentId::new(row.id),
        order_number: row.order_number.to_owned(),
        first_name: row.first_name.to_owned(),
        last_name: row.last_name.to_owned(),
        department: row.department.to_owned(),
        municipality: row.municipality.to_owned(),
        package_count: row.package_count,
        // All sample rows fall in January 2024.
        date: NaiveDate::from_ymd_opt(2024, 1, row.day).unwrap_or_default(),
        status: row.status,
    }
}

/// Loads a shipment list from a JSON array file.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when the file cannot be read and
/// [`ApiError::Api`] when its content is not a valid shipment array.
pub fn load_shipments_file(path: &Utf8Path) -> Result<Vec<Shipment>, ApiError> {
    let content = fs::read_to_string(path).map_err(|error| ApiError::Io {
        message: format!("failed to read shipments file '{path}': {error}"),
    })?;

    let shipments: Vec<Shipment> =
        serde_json::from_str(&content).map_err(|error| ApiError::Api {
            message: format!("shipments file '{path}' is not a valid shipment list: {error}"),
        })?;

    tracing::debug!("loaded {} shipments from '{path}'", shipments.len());
    Ok(shipments)
}

//! Shipment records shown in the history table.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier of a shipment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(String);

impl ShipmentId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShipmentId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Delivery status of a shipment.
///
/// The serialised names match the remote API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentStatus {
    /// Delivered to the recipient.
    #[serde(rename = "Entregado")]
    Delivered,
    /// Picked up and on its way.
    #[serde(rename = "En tránsito")]
    InTransit,
    /// Created but not yet dispatched.
    #[serde(rename = "Pendiente")]
    Pending,
    /// The courier has not collected the package.
    #[serde(rename = "Sin recoger")]
    NotPickedUp,
}

impl ShipmentStatus {
    /// Returns a human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::InTransit => "In transit",
            Self::Pending => "Pending",
            Self::NotPickedUp => "Not picked up",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One order/delivery record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique, stable identifier.
    pub id: ShipmentId,
    /// Order number printed on the waybill.
    #[serde(rename = "numeroOrden")]
    pub order_number: String,
    /// Recipient first name.
    #[serde(rename = "nombre")]
    pub first_name: String,
    /// Recipient last name(s).
    #[serde(rename = "apellidos")]
    pub last_name: String,
    /// Destination department.
    #[serde(rename = "departamento")]
    pub department: String,
    /// Destination municipality.
    #[serde(rename = "municipio")]
    pub municipality: String,
    /// Number of packages in the order.
    #[serde(rename = "paquetes")]
    pub package_count: u32,
    /// Order date.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Delivery status.
    #[serde(rename = "estado")]
    pub status: ShipmentStatus,
}

impl Shipment {
    /// Returns the recipient's full name.
    #[must_use]
    pub fn recipient(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::delivered(ShipmentStatus::Delivered, "\"Entregado\"")]
    #[case::in_transit(ShipmentStatus::InTransit, "\"En tránsito\"")]
    #[case::pending(ShipmentStatus::Pending, "\"Pendiente\"")]
    #[case::not_picked_up(ShipmentStatus::NotPickedUp, "\"Sin recoger\"")]
    fn status_uses_api_wire_names(#[case] status: ShipmentStatus, #[case] expected: &str) {
        let encoded = serde_json::to_string(&status).expect("status should encode");
        assert_eq!(encoded, expected);
    }

    #[test]
    fn shipment_decodes_from_api_payload() {
        let payload = serde_json::json!({
            "id": "7",
            "numeroOrden": "555",
            "nombre": "Ana",
            "apellidos": "Pérez",
            "departamento": "La Libertad",
            "municipio": "Santa Tecla",
            "paquetes": 2,
            "fecha": "2024-03-01",
            "estado": "Sin recoger"
        });

        let shipment: Shipment =
            serde_json::from_value(payload).expect("payload should decode");

        assert_eq!(shipment.id.as_str(), "7");
        assert_eq!(shipment.order_number, "555");
        assert_eq!(shipment.recipient(), "Ana Pérez");
        assert_eq!(shipment.package_count, 2);
        assert_eq!(
            shipment.date,
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
        );
        assert_eq!(shipment.status, ShipmentStatus::NotPickedUp);
    }

    #[test]
    fn negative_package_count_is_rejected() {
        let payload = serde_json::json!({
            "id": "1", "numeroOrden": "1", "nombre": "a", "apellidos": "b",
            "departamento": "c", "municipio": "d", "paquetes": -1,
            "fecha": "2024-01-01", "estado": "Pendiente"
        });

        assert!(serde_json::from_value::<Shipment>(payload).is_err());
    }
}

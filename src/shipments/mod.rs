//! Shipment records and the sources they are loaded from.
//!
//! The history table is fed either by the bundled sample data set or by a
//! JSON array file exported from the remote API.

mod model;
mod source;

pub use model::{Shipment, ShipmentId, ShipmentStatus};
pub use source::{load_shipments_file, sample_shipments};

//! Shipdesk library crate: shipment history filtering and selection.
//!
//! The core is [`store::ShipmentFilterStore`], which keeps staged and
//! committed filter criteria over a shipment list together with a
//! multi-select selection set. Around it sit local persistence of the
//! criteria, authentication against the shipping API, client-side form
//! validation, selection export, and a terminal UI.

pub mod api;
pub mod auth;
pub mod config;
pub mod export;
pub mod forms;
pub mod persistence;
pub mod shipments;
pub mod store;
pub mod telemetry;
pub mod tui;

pub use api::{ApiConfig, ApiError};
pub use config::{OperationMode, ShipdeskConfig};
pub use shipments::{Shipment, ShipmentId, ShipmentStatus};
pub use store::{FilterCriteria, ShipmentFilterStore, StoreLifecycle};

//! UI components for the shipment history TUI.

mod shipment_list;
pub(crate) mod text_truncate;

pub use shipment_list::{ShipmentListComponent, ShipmentListViewContext};

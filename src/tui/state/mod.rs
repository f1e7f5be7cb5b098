//! State management for the shipment history TUI.
//!
//! The filter and selection state itself lives in
//! [`crate::store::ShipmentFilterStore`]; this module only holds what is
//! specific to the terminal: cursor and scroll position, and the text being
//! typed into a filter field.

mod cursor_state;
mod filter_input;

pub use cursor_state::CursorState;
pub use filter_input::{FilterInput, InputField};

//! Shipment filtering and selection state.
//!
//! This module provides the store behind the shipment history table: the
//! staged and committed filter criteria, the visible list derived from the
//! committed criteria, and the multi-select selection set.

mod criteria;
mod filter_store;
mod lifecycle;

pub use criteria::{DateRange, FilterCriteria, FilterError, StagedField};
pub use filter_store::{PersistedFilters, ShipmentFilterStore};
pub use lifecycle::{LifecyclePhase, RestoringStore, StoreLifecycle};

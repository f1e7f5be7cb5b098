//! Restoring/ready lifecycle around the filter store.
//!
//! Persisted criteria are loaded after the shipment list is available. Until
//! they arrive the store sits in the restoring phase, which exposes no
//! derived state; [`RestoringStore::restore`] is the only way to obtain a
//! ready [`ShipmentFilterStore`].

use crate::shipments::Shipment;

use super::filter_store::{PersistedFilters, ShipmentFilterStore};

/// Phase of the store lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Persisted criteria have not been applied yet.
    Restoring,
    /// Derived fields may be read.
    Ready,
}

/// A store waiting for its persisted criteria.
#[derive(Debug, Clone, Default)]
pub struct RestoringStore {
    shipments: Vec<Shipment>,
}

impl RestoringStore {
    /// Holds the shipment list until criteria are restored.
    #[must_use]
    pub const fn new(shipments: Vec<Shipment>) -> Self {
        Self { shipments }
    }

    /// Number of shipments waiting to be filtered.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.shipments.len()
    }

    /// Applies restored criteria, or the defaults when nothing was stored.
    #[must_use]
    pub fn restore(self, filters: Option<PersistedFilters>) -> ShipmentFilterStore {
        ShipmentFilterStore::with_filters(self.shipments, filters.unwrap_or_default())
    }
}

/// The store in either lifecycle phase.
#[derive(Debug, Clone)]
pub enum StoreLifecycle {
    /// Waiting for persisted criteria.
    Restoring(RestoringStore),
    /// Ready for reads and mutations.
    Ready(ShipmentFilterStore),
}

impl StoreLifecycle {
    /// Starts a lifecycle in the restoring phase.
    #[must_use]
    pub const fn restoring(shipments: Vec<Shipment>) -> Self {
        Self::Restoring(RestoringStore::new(shipments))
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> LifecyclePhase {
        match self {
            Self::Restoring(_) => LifecyclePhase::Restoring,
            Self::Ready(_) => LifecyclePhase::Ready,
        }
    }

    /// Returns the ready store, if restoration has finished.
    #[must_use]
    pub const fn ready(&self) -> Option<&ShipmentFilterStore> {
        match self {
            Self::Restoring(_) => None,
            Self::Ready(store) => Some(store),
        }
    }

    /// Returns the ready store mutably, if restoration has finished.
    pub const fn ready_mut(&mut self) -> Option<&mut ShipmentFilterStore> {
        match self {
            Self::Restoring(_) => None,
            Self::Ready(store) => Some(store),
        }
    }

    /// Moves to the ready phase.
    ///
    /// Returns `false` without changing anything when already ready, so a
    /// late duplicate restore cannot clobber live filters.
    pub fn finish_restore(&mut self, filters: Option<PersistedFilters>) -> bool {
        let Self::Restoring(pending) = self else {
            return false;
        };
        let store = std::mem::take(pending).restore(filters);
        *self = Self::Ready(store);
        true
    }
}

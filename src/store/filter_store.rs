//! Filter staging, commit, and multi-select state for the shipment table.
//!
//! The store keeps the full shipment list together with cached indices of
//! the shipments passing the committed criteria. The cache is rebuilt
//! whenever the committed criteria or the shipment list change, and the
//! "all selected" flag is recomputed after every selection or visibility
//! change.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::shipments::{Shipment, ShipmentId};

use super::criteria::{FilterCriteria, StagedField};

/// The persisted subset of the store: committed and staged criteria.
///
/// Shipment data and selection are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedFilters {
    /// Criteria currently driving the visible list.
    pub committed: FilterCriteria,
    /// Criteria being edited.
    pub staged: FilterCriteria,
}

/// Shipment list with staged/committed filters and a selection set.
#[derive(Debug, Clone, Default)]
pub struct ShipmentFilterStore {
    shipments: Vec<Shipment>,
    committed: FilterCriteria,
    staged: FilterCriteria,
    selection: BTreeSet<ShipmentId>,
    /// Indices into `shipments` passing `committed`, in source order.
    visible_indices: Vec<usize>,
    all_selected: bool,
}

impl ShipmentFilterStore {
    /// Creates a store showing every shipment with nothing selected.
    #[must_use]
    pub fn new(shipments: Vec<Shipment>) -> Self {
        Self::with_filters(shipments, PersistedFilters::default())
    }

    /// Creates a store with previously persisted criteria applied.
    #[must_use]
    pub fn with_filters(shipments: Vec<Shipment>, filters: PersistedFilters) -> Self {
        let mut store = Self {
            shipments,
            committed: filters.committed,
            staged: filters.staged,
            ..Self::default()
        };
        store.rebuild_visible();
        store
    }

    /// Updates one field of the staged criteria.
    ///
    /// The visible list is unaffected until [`Self::commit_filters`].
    pub fn set_staged_field(&mut self, field: StagedField) {
        match field {
            StagedField::Query(query) => self.staged.query = query,
            StagedField::DateRange(range) => self.staged.date_range = range,
        }
    }

    /// Applies the staged criteria and clears the selection.
    pub fn commit_filters(&mut self) {
        self.committed = self.staged.clone();
        self.rebuild_visible();
        self.clear_selection();
    }

    /// Resets both criteria to their defaults and clears the selection.
    pub fn reset_filters(&mut self) {
        self.committed = FilterCriteria::default();
        self.staged = FilterCriteria::default();
        self.rebuild_visible();
        self.clear_selection();
    }

    /// Selects every visible shipment, or clears the selection when every
    /// visible shipment is already selected.
    ///
    /// Selecting replaces any prior selection, including ids hidden by the
    /// committed criteria.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected {
            self.selection.clear();
        } else {
            self.selection = self.visible().map(|s| s.id.clone()).collect();
        }
        self.refresh_all_selected();
    }

    /// Flips membership of `id` in the selection set.
    ///
    /// The id need not be visible, or even known to the store.
    pub fn toggle_select_one(&mut self, id: &ShipmentId) {
        if !self.selection.remove(id) {
            self.selection.insert(id.clone());
        }
        self.refresh_all_selected();
    }

    /// Empties the selection set.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.all_selected = false;
    }

    /// Replaces the shipment list and recomputes the visible list.
    ///
    /// The selection is left untouched.
    pub fn replace_shipments(&mut self, shipments: Vec<Shipment>) {
        self.shipments = shipments;
        self.rebuild_visible();
    }

    /// Shipments passing the committed criteria, in source order.
    pub fn visible(&self) -> impl Iterator<Item = &Shipment> {
        self.visible_indices
            .iter()
            .filter_map(|&index| self.shipments.get(index))
    }

    /// Returns the visible shipment at `position`, if any.
    #[must_use]
    pub fn visible_at(&self, position: usize) -> Option<&Shipment> {
        self.visible_indices
            .get(position)
            .and_then(|&index| self.shipments.get(index))
    }

    /// Number of visible shipments.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// True iff the visible list is non-empty and every visible id is
    /// selected.
    #[must_use]
    pub const fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Returns the raw selection set, hidden ids included.
    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<ShipmentId> {
        &self.selection
    }

    /// Returns true if `id` is in the selection set.
    #[must_use]
    pub fn is_selected(&self, id: &ShipmentId) -> bool {
        self.selection.contains(id)
    }

    /// Number of ids in the selection set.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected shipments in source order, including ones currently hidden.
    #[must_use]
    pub fn selected_shipments(&self) -> Vec<&Shipment> {
        self.shipments
            .iter()
            .filter(|shipment| self.selection.contains(&shipment.id))
            .collect()
    }

    /// The full shipment list.
    #[must_use]
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Criteria currently driving the visible list.
    #[must_use]
    pub const fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    /// Criteria being edited.
    #[must_use]
    pub const fn staged(&self) -> &FilterCriteria {
        &self.staged
    }

    /// Returns true when the committed criteria restrict the list.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns a snapshot of the criteria suitable for persistence.
    #[must_use]
    pub fn persisted_filters(&self) -> PersistedFilters {
        PersistedFilters {
            committed: self.committed.clone(),
            staged: self.staged.clone(),
        }
    }

    fn rebuild_visible(&mut self) {
        self.visible_indices = self
            .shipments
            .iter()
            .enumerate()
            .filter(|(_, shipment)| self.committed.matches(shipment))
            .map(|(index, _)| index)
            .collect();
        self.refresh_all_selected();
    }

    fn refresh_all_selected(&mut self) {
        self.all_selected = !self.visible_indices.is_empty()
            && self.visible().all(|shipment| self.selection.contains(&shipment.id));
    }
}

#[cfg(test)]
#[path = "filter_store_tests.rs"]
mod tests;

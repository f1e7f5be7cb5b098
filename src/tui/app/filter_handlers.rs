//! Filter editing, commit/reset, and persistence handlers.
//!
//! Typing only changes the staged criteria; the visible list follows the
//! committed criteria, which move on `Enter` (commit) or `x` (reset). Each
//! commit or reset is written back to storage in the background.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ShipmentApp;
use crate::store::{PersistedFilters, ShipmentFilterStore};
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FilterInput, InputField};

impl ShipmentApp {
    /// Dispatches filter messages to their handlers.
    pub(super) fn handle_filter_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartEditing(field) => self.handle_start_editing(*field),
            AppMsg::InputChar(character) => {
                if let Some(input) = self.editing.as_mut() {
                    input.push(*character);
                }
                None
            }
            AppMsg::InputBackspace => {
                if let Some(input) = self.editing.as_mut() {
                    input.backspace();
                }
                None
            }
            AppMsg::InputSubmit => self.handle_input_submit(),
            AppMsg::InputCancel => {
                self.editing = None;
                None
            }
            AppMsg::CommitFilters => self.handle_commit(),
            AppMsg::ResetFilters => self.handle_reset(),
            AppMsg::FiltersRestored(filters) => self.handle_filters_restored(filters.clone()),
            AppMsg::FiltersSaved => {
                tracing::debug!("shipment filters saved");
                None
            }
            _ => {
                debug_assert!(false, "non-filter message routed to handle_filter_msg");
                None
            }
        }
    }

    fn handle_start_editing(&mut self, field: InputField) -> Option<Cmd> {
        let store = self.lifecycle.ready()?;
        self.editing = Some(FilterInput::start(field, store.staged()));
        self.error = None;
        None
    }

    /// Stages the edited value. An unparsable period keeps the editor open.
    fn handle_input_submit(&mut self) -> Option<Cmd> {
        let input = self.editing.as_ref()?;
        match input.to_staged_field() {
            Ok(field) => {
                if let Some(store) = self.store_mut() {
                    store.set_staged_field(field);
                }
                self.editing = None;
                self.error = None;
            }
            Err(error) => self.error = Some(error.to_string()),
        }
        None
    }

    fn handle_commit(&mut self) -> Option<Cmd> {
        let store = self.store_mut()?;
        store.commit_filters();
        let event = TelemetryEvent::FiltersCommitted {
            visible_count: store.visible_count(),
            total_count: store.shipments().len(),
            filtered: store.has_active_filters(),
        };
        let filters = store.persisted_filters();

        tracing::debug!(label = %filters.committed.label(), "committed shipment filters");
        self.telemetry.record(event);
        self.after_filter_change(filters)
    }

    fn handle_reset(&mut self) -> Option<Cmd> {
        let store = self.store_mut()?;
        store.reset_filters();
        let filters = store.persisted_filters();
        self.after_filter_change(filters)
    }

    fn after_filter_change(&mut self, filters: PersistedFilters) -> Option<Cmd> {
        self.editing = None;
        self.status = None;
        self.cursor.reset();
        self.adjust_scroll_to_cursor();
        if self.persist_filters {
            Some(Self::save_filters_cmd(filters))
        } else {
            None
        }
    }

    /// Applies restored criteria exactly once.
    fn handle_filters_restored(&mut self, filters: Option<PersistedFilters>) -> Option<Cmd> {
        if self.lifecycle.finish_restore(filters) {
            let visible = self.store().map_or(0, ShipmentFilterStore::visible_count);
            tracing::debug!(visible, "shipment filters restored");
            self.adjust_scroll_to_cursor();
        } else {
            tracing::debug!("ignoring duplicate filter restore");
        }
        None
    }

    /// Loads persisted filters off the UI thread.
    pub(super) fn restore_filters_cmd() -> Cmd {
        Box::pin(async {
            let filters = tokio::task::spawn_blocking(crate::tui::load_filters)
                .await
                .unwrap_or_else(|error| {
                    tracing::warn!(%error, "filter restore task failed");
                    None
                });
            Some(Box::new(AppMsg::FiltersRestored(filters)) as Box<dyn Any + Send>)
        })
    }

    fn save_filters_cmd(filters: PersistedFilters) -> Cmd {
        Box::pin(async move {
            let msg = match tokio::task::spawn_blocking(move || {
                crate::tui::save_filters(&filters)
            })
            .await
            {
                Ok(Ok(())) => AppMsg::FiltersSaved,
                Ok(Err(error)) => AppMsg::OperationFailed(format!("Failed to save filters: {error}")),
                Err(error) => AppMsg::OperationFailed(format!("Filter save task failed: {error}")),
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }
}

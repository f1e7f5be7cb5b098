//! Selection and download handlers.

use bubbletea_rs::Cmd;

use super::ShipmentApp;
use crate::tui::messages::AppMsg;

impl ShipmentApp {
    /// Dispatches selection messages to their handlers.
    pub(super) fn handle_selection_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ToggleSelectCurrent => self.handle_toggle_current(),
            AppMsg::ToggleSelectAll => {
                if let Some(store) = self.store_mut() {
                    store.toggle_select_all();
                }
            }
            AppMsg::DownloadRequested => self.handle_download(),
            _ => {
                debug_assert!(false, "non-selection message routed to handle_selection_msg");
            }
        }
        None
    }

    fn handle_toggle_current(&mut self) {
        let Some(id) = self.current_shipment().map(|shipment| shipment.id.clone()) else {
            return;
        };
        if let Some(store) = self.store_mut() {
            store.toggle_select_one(&id);
        }
    }

    /// Hands the selected shipments, in source order, to the download hook.
    fn handle_download(&mut self) {
        let Some(store) = self.lifecycle.ready() else {
            return;
        };
        let Some(hook) = self.download_hook.as_mut() else {
            self.error = Some("Downloads are not configured".to_owned());
            return;
        };

        let selected = store.selected_shipments();
        if selected.is_empty() {
            self.error = Some("Select at least one shipment to download".to_owned());
            return;
        }

        let count = selected.len();
        match hook.download(&selected) {
            Ok(()) => {
                self.error = None;
                self.status = Some(hook.destination().map_or_else(
                    || format!("Downloaded {count} shipment(s)"),
                    |path| format!("Downloaded {count} shipment(s) to {path}"),
                ));
            }
            Err(error) => {
                tracing::warn!(%error, "selection download failed");
                self.error = Some(format!("Download failed: {error}"));
            }
        }
    }
}

//! Lifecycle and window handlers for the shipment TUI.

use bubbletea_rs::Cmd;

use super::{ShipmentApp, list_height};
use crate::tui::messages::AppMsg;

impl ShipmentApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::OperationFailed(message) => {
                tracing::warn!(error = %message, "background operation failed");
                self.error = Some(message.clone());
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => None,
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.shipment_list.set_visible_height(list_height(height));
        self.adjust_scroll_to_cursor();
        None
    }
}

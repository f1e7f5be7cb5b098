//! Navigation handlers and cursor management.
//!
//! Movement is clamped to the visible list and the scroll offset follows
//! the cursor.

use bubbletea_rs::Cmd;

use super::ShipmentApp;
use crate::tui::messages::AppMsg;

impl ShipmentApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.visible_count();
        let page = self.shipment_list.visible_height().max(1);
        match msg {
            AppMsg::CursorUp => self.cursor.move_up(1),
            AppMsg::CursorDown => self.cursor.move_down(1, count),
            AppMsg::PageUp => self.cursor.move_up(page),
            AppMsg::PageDown => self.cursor.move_down(page, count),
            AppMsg::Home => self.cursor.reset(),
            AppMsg::End => self.cursor.cursor_position = count.saturating_sub(1),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        self.adjust_scroll_to_cursor();
        None
    }

    /// Keeps the cursor inside the list and the viewport.
    pub(super) fn adjust_scroll_to_cursor(&mut self) {
        self.cursor.clamp_cursor(self.visible_count());
        self.cursor
            .keep_cursor_visible(self.shipment_list.visible_height());
    }
}

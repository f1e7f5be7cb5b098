//! Rendering logic for the shipment TUI application.
//!
//! Pure query methods producing the chrome around the shipment table. Each
//! method returns exactly one newline-terminated line except the help
//! overlay.

use super::ShipmentApp;
use crate::store::LifecyclePhase;

impl ShipmentApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Shipdesk - Shipment History";
        let restoring = if self.phase() == LifecyclePhase::Restoring {
            " [Restoring...]"
        } else {
            ""
        };
        format!("{title}{restoring}\n")
    }

    /// Renders the committed filter, visible/total counts and selection size.
    pub(super) fn render_filter_bar(&self) -> String {
        let Some(store) = self.store() else {
            return "Filter: -\n".to_owned();
        };
        format!(
            "Filter: {} ({}/{})  Selected: {}\n",
            store.committed().label(),
            store.visible_count(),
            store.shipments().len(),
            store.selected_count(),
        )
    }

    /// Renders the edit prompt, or the staged criteria when they differ from
    /// the committed ones.
    pub(super) fn render_edit_line(&self) -> String {
        if let Some(input) = &self.editing {
            return format!("{}: {}_\n", input.field().prompt(), input.buffer());
        }

        match self.store() {
            Some(store) if store.staged() != store.committed() => {
                format!("Staged: {} (Enter to apply)\n", store.staged().label())
            }
            _ => "\n".to_owned(),
        }
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        let hints = if self.editing.is_some() {
            "Enter:stage  Esc:cancel  Backspace:delete"
        } else {
            self.table_status_hints()
        };
        format!("{hints}\n")
    }

    const fn table_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "q:quit  ?:help  space:select  /:search  Enter:apply  d:download"
        } else {
            "j/k:move  space:select  a:all  /:search  t:period  Enter:apply  x:reset  d:download  ?:help  q:quit"
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first shipment
  End, G     Go to last shipment

Selection:
  Space      Toggle shipment under cursor
  a          Select all visible / clear selection
  d          Download selected shipments

Filtering:
  /          Edit search text
  t          Edit period (YYYY-MM-DD..YYYY-MM-DD)
  Enter      Apply staged filters
  x          Reset filters

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}

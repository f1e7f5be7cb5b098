//! `Model` trait implementation for the shipment TUI application.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::ShipmentApp;
use crate::tui::components::ShipmentListViewContext;
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;

impl Model for ShipmentApp {
    fn init() -> (Self, Option<Cmd>) {
        let shipments = crate::tui::get_initial_shipments();
        let (width, height) = crate::tui::get_initial_terminal_size();

        let mut model = Self::with_dimensions(shipments, width, height)
            .with_telemetry(crate::tui::get_telemetry_sink())
            .with_filter_persistence(crate::tui::has_filter_storage());
        if let Some(hook) = crate::tui::get_download_hook() {
            model = model.with_download_hook(Box::new(hook));
        }

        (model, Some(Self::restore_filters_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_filter_bar());
        output.push_str(&self.render_edit_line());

        let max_width = (self.width as usize).max(1);
        match self.store() {
            Some(store) => {
                let ctx = ShipmentListViewContext {
                    store,
                    cursor_position: self.cursor.cursor_position,
                    scroll_offset: self.cursor.scroll_offset,
                    visible_height: self.shipment_list.visible_height(),
                    max_width,
                };
                output.push_str(&self.shipment_list.view(&ctx));
            }
            None => output.push_str("  Restoring saved filters...\n"),
        }

        let list_lines = output.lines().count();
        let body_end = (self.height as usize).saturating_sub(1);
        output.push_str(&"\n".repeat(body_end.saturating_sub(list_lines)));
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl ShipmentApp {
    /// Returns the current input context for key mapping.
    pub(super) const fn input_context(&self) -> InputContext {
        if self.editing.is_some() {
            InputContext::Editing
        } else {
            InputContext::Table
        }
    }

    /// Pads or truncates the frame to the terminal dimensions.
    ///
    /// Rows stop one column short of the terminal width to avoid autowrap.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_n(blank, missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    output.extend(std::iter::repeat_n(' ', width.saturating_sub(visible_width)));
    output
}

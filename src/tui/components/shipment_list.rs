//! Shipment table component.
//!
//! Renders the visible shipments as fixed-width columns with a cursor
//! marker and a selection checkbox per row. The header checkbox mirrors the
//! store's "all selected" flag.

use crate::shipments::Shipment;
use crate::store::ShipmentFilterStore;

use super::text_truncate::{fit_to_width, truncate_to_display_width_with_ellipsis};

/// Default visible height for the shipment list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

const ORDER_WIDTH: usize = 10;
const RECIPIENT_WIDTH: usize = 22;
const DESTINATION_WIDTH: usize = 24;
const PACKAGES_WIDTH: usize = 4;
const DATE_WIDTH: usize = 10;

/// Context for rendering the shipment list view.
#[derive(Debug, Clone, Copy)]
pub struct ShipmentListViewContext<'a> {
    /// Store providing visible rows and selection.
    pub store: &'a ShipmentFilterStore,
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows, excluding the header.
    pub visible_height: usize,
    /// Maximum width in columns.
    pub max_width: usize,
}

/// Component for displaying the shipment table.
#[derive(Debug, Clone)]
pub struct ShipmentListComponent {
    visible_height: usize,
}

impl Default for ShipmentListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipmentListComponent {
    /// Creates a new shipment list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the header and the rows inside the scroll window.
    #[must_use]
    pub fn view(&self, ctx: &ShipmentListViewContext<'_>) -> String {
        let mut output = Self::header_line(ctx);
        output.push('\n');

        if ctx.store.visible_count() == 0 {
            output.push_str("  No shipments match the current filters.\n");
            return output;
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        for (position, shipment) in ctx
            .store
            .visible()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let line = Self::format_row(
                shipment,
                position == ctx.cursor_position,
                ctx.store.is_selected(&shipment.id),
            );
            output.push_str(&truncate_to_display_width_with_ellipsis(
                &line,
                ctx.max_width,
            ));
            output.push('\n');
        }

        output
    }

    fn header_line(ctx: &ShipmentListViewContext<'_>) -> String {
        let all_box = checkbox(ctx.store.all_selected());
        let line = format!(
            "  {all_box} {} {} {} {} {} Status",
            fit_to_width("Order", ORDER_WIDTH),
            fit_to_width("Recipient", RECIPIENT_WIDTH),
            fit_to_width("Destination", DESTINATION_WIDTH),
            fit_to_width("Pkgs", PACKAGES_WIDTH),
            fit_to_width("Date", DATE_WIDTH),
        );
        truncate_to_display_width_with_ellipsis(&line, ctx.max_width)
    }

    /// Formats a single table row.
    fn format_row(shipment: &Shipment, under_cursor: bool, selected: bool) -> String {
        let prefix = if under_cursor { ">" } else { " " };
        let destination = format!("{}, {}", shipment.municipality, shipment.department);
        let packages = format!("{:>width$}", shipment.package_count, width = PACKAGES_WIDTH);
        format!(
            "{prefix} {} {} {} {} {packages} {} {}",
            checkbox(selected),
            fit_to_width(&shipment.order_number, ORDER_WIDTH),
            fit_to_width(&shipment.recipient(), RECIPIENT_WIDTH),
            fit_to_width(&destination, DESTINATION_WIDTH),
            shipment.date,
            shipment.status,
        )
    }
}

const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::shipments::sample_shipments;

    #[fixture]
    fn store() -> ShipmentFilterStore {
        ShipmentFilterStore::new(sample_shipments())
    }

    fn render(store: &ShipmentFilterStore, cursor_position: usize) -> String {
        ShipmentListComponent::new().view(&ShipmentListViewContext {
            store,
            cursor_position,
            scroll_offset: 0,
            visible_height: 10,
            max_width: 200,
        })
    }

    #[rstest]
    fn renders_header_and_one_row_per_visible_shipment(store: ShipmentFilterStore) {
        let output = render(&store, 0);

        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("  [ ] Order"));
        assert!(output.contains("Julio Almendarez"));
        assert!(output.contains("Bogotá, Cundinamarca"));
    }

    #[rstest]
    fn marks_cursor_and_selection(mut store: ShipmentFilterStore) {
        store.toggle_select_one(&"2".into());

        let output = render(&store, 2);
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(rows.len(), 3);
        assert!(rows.first().is_some_and(|row| row.starts_with("  [ ] 3446788")));
        assert!(rows.get(1).is_some_and(|row| row.starts_with("  [x] 2024020")));
        assert!(rows.get(2).is_some_and(|row| row.starts_with("> [ ] 2024021")));
    }

    #[rstest]
    fn header_checkbox_tracks_all_selected(mut store: ShipmentFilterStore) {
        store.toggle_select_all();

        let output = render(&store, 0);

        assert!(output.starts_with("  [x] Order"));
    }

    #[rstest]
    fn shows_empty_message_when_nothing_matches(mut store: ShipmentFilterStore) {
        store.set_staged_field(crate::store::StagedField::Query("zzz".to_owned()));
        store.commit_filters();

        let output = render(&store, 0);

        assert!(output.contains("No shipments match the current filters."));
    }

    #[rstest]
    fn respects_scroll_window(store: ShipmentFilterStore) {
        let output = ShipmentListComponent::new().view(&ShipmentListViewContext {
            store: &store,
            cursor_position: 2,
            scroll_offset: 1,
            visible_height: 1,
            max_width: 200,
        });

        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows.first().is_some_and(|row| row.contains("2024020")));
    }
}

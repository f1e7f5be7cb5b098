//! Cursor and scroll position within the visible shipment list.

/// Cursor position and scroll offset over the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Current cursor position (0-indexed) within the visible list.
    pub cursor_position: usize,
    /// Rows scrolled from the top of the visible list.
    pub scroll_offset: usize,
}

impl CursorState {
    /// Clamps the cursor to a list of `count` rows.
    ///
    /// An empty list resets both cursor and scroll offset to zero.
    pub const fn clamp_cursor(&mut self, count: usize) {
        if count == 0 {
            self.cursor_position = 0;
            self.scroll_offset = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step`, stopping at the first row.
    pub const fn move_up(&mut self, step: usize) {
        self.cursor_position = self.cursor_position.saturating_sub(step);
    }

    /// Moves the cursor down by `step`, stopping at the last of `count` rows.
    pub fn move_down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        self.cursor_position = self.cursor_position.saturating_add(step).min(max_index);
    }

    /// Adjusts the scroll offset so the cursor stays inside a viewport of
    /// `visible_height` rows.
    pub const fn keep_cursor_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }

    /// Moves back to the first row.
    pub const fn reset(&mut self) {
        self.cursor_position = 0;
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty_list(5, 0, 0)]
    #[case::past_end(5, 3, 2)]
    #[case::in_range(1, 3, 1)]
    fn clamp_cursor_bounds_position(
        #[case] start: usize,
        #[case] count: usize,
        #[case] expected: usize,
    ) {
        let mut state = CursorState {
            cursor_position: start,
            scroll_offset: 0,
        };

        state.clamp_cursor(count);

        assert_eq!(state.cursor_position, expected);
    }

    #[test]
    fn move_down_stops_at_last_row() {
        let mut state = CursorState::default();

        state.move_down(10, 3);

        assert_eq!(state.cursor_position, 2);
    }

    #[test]
    fn move_down_on_empty_list_stays_at_zero() {
        let mut state = CursorState::default();

        state.move_down(1, 0);

        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn scroll_follows_cursor_past_viewport() {
        let mut state = CursorState {
            cursor_position: 7,
            scroll_offset: 0,
        };

        state.keep_cursor_visible(5);

        assert_eq!(state.scroll_offset, 3);

        state.cursor_position = 1;
        state.keep_cursor_visible(5);
        assert_eq!(state.scroll_offset, 1);
    }
}

//! Key-to-message mapping for the TUI.
//!
//! While a filter field is being edited, printable keys go to the edit
//! buffer instead of triggering shortcuts.

use crossterm::event::KeyCode;

use super::messages::AppMsg;
use super::state::InputField;

/// Which key bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the shipment table.
    Table,
    /// Typing into a staged filter field.
    Editing,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Table => map_table_key(key.key),
        InputContext::Editing => map_editing_key(key.key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_table_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char(' ') => Some(AppMsg::ToggleSelectCurrent),
        KeyCode::Char('a') => Some(AppMsg::ToggleSelectAll),
        KeyCode::Char('/') => Some(AppMsg::StartEditing(InputField::Query)),
        KeyCode::Char('t') => Some(AppMsg::StartEditing(InputField::DateRange)),
        KeyCode::Enter => Some(AppMsg::CommitFilters),
        KeyCode::Char('x') => Some(AppMsg::ResetFilters),
        KeyCode::Char('d') => Some(AppMsg::DownloadRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_editing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(character) => Some(AppMsg::InputChar(character)),
        KeyCode::Backspace => Some(AppMsg::InputBackspace),
        KeyCode::Enter => Some(AppMsg::InputSubmit),
        KeyCode::Esc => Some(AppMsg::InputCancel),
        _ => None,
    }
}

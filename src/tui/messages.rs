//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and terminal
//! events.

use crate::store::PersistedFilters;

use super::state::InputField;

/// Messages for the shipment history TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first row.
    Home,
    /// Move cursor to the last row.
    End,

    // Selection
    /// Flip selection of the shipment under the cursor.
    ToggleSelectCurrent,
    /// Select every visible shipment, or clear the selection.
    ToggleSelectAll,
    /// Hand the selection to the download hook.
    DownloadRequested,

    // Filter editing
    /// Start editing a staged field.
    StartEditing(InputField),
    /// Append a character to the field being edited.
    InputChar(char),
    /// Delete the last character of the field being edited.
    InputBackspace,
    /// Stage the edited value and stop editing.
    InputSubmit,
    /// Stop editing without staging anything.
    InputCancel,
    /// Apply the staged criteria.
    CommitFilters,
    /// Reset staged and committed criteria.
    ResetFilters,

    // Persistence
    /// Persisted criteria finished loading.
    FiltersRestored(Option<PersistedFilters>),
    /// Committed criteria were written to storage.
    FiltersSaved,
    /// A background operation failed.
    OperationFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::PageUp | Self::PageDown | Self::Home | Self::End
        )
    }

    /// Returns true for selection and download messages.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::ToggleSelectCurrent | Self::ToggleSelectAll | Self::DownloadRequested
        )
    }

    /// Returns true for filter editing and persistence messages.
    #[must_use]
    pub const fn is_filter(&self) -> bool {
        matches!(
            self,
            Self::StartEditing(_)
                | Self::InputChar(_)
                | Self::InputBackspace
                | Self::InputSubmit
                | Self::InputCancel
                | Self::CommitFilters
                | Self::ResetFilters
                | Self::FiltersRestored(_)
                | Self::FiltersSaved
        )
    }
}

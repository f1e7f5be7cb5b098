//! Dashboard UI preferences.

use serde::{Deserialize, Serialize};

/// Dashboard section shown on startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardTab {
    /// The order creation wizard.
    #[default]
    #[serde(rename = "crear-orden")]
    CreateOrder,
    /// The shipment history table.
    #[serde(rename = "historial")]
    History,
}

impl DashboardTab {
    /// Returns a short label for status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateOrder => "Create order",
            Self::History => "History",
        }
    }
}

/// Persisted dashboard preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Whether the sidebar is collapsed.
    pub sidebar_collapsed: bool,
    /// Section shown on startup.
    pub active_tab: DashboardTab,
}

impl UserPreferences {
    /// Flips the sidebar state.
    pub const fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

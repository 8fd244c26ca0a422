//! Local page chrome (drawer, notices).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of board data so a refetch
//! never resets which tab is open.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs in the document detail drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerTab {
    /// Metadata table.
    #[default]
    Info,
    /// Extracted fields from the result payload.
    Data,
}

/// UI state for the board page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub drawer_open: bool,
    pub drawer_tab: DrawerTab,
    /// Short success message shown after a move.
    pub notice: Option<String>,
}

impl UiState {
    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
        self.drawer_tab = DrawerTab::Info;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}
